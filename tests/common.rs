#![allow(dead_code)]

use letter_renderer_rust::{DrawOp, LetterContent, RecordingSurface, RendererConfig, render_with};

pub const LONG_PARAGRAPH: &str = "J'ai l'honneur de vous demander de bien vouloir nous fournir dans \
    les meilleurs délais les noms du propriétaire et du gérant, les photocopies des statuts, avis \
    d'imposition, déclaration de chiffre d'affaire et les situations fiscales durant l'année 2022, \
    2023 et 2024 auprès de votre unité de la société ci-après.";

/// The letter used throughout the service's own samples.
pub fn sample_letter() -> LetterContent {
    LetterContent {
        sender_service: "SERVICE DU SYSTEME D'INFORMATION FISCALE".to_string(),
        receiver_service: "SERVICE REGIONAL DES ENTREPRISE 2 ANALAMANGA".to_string(),
        date: "06 OCT 2025".to_string(),
        letter_number: "231".to_string(),
        subject: "Demande d'information fiscale".to_string(),
        importance: "Urgent".to_string(),
        body: "NIF : 4001939516\nRaison sociale : SIAM MADAGASCAR SARLU".to_string(),
    }
}

/// Config whose assets directory does not exist, so no emblems are drawn.
pub fn config_without_assets() -> RendererConfig {
    RendererConfig::default().with_assets_dir("/nonexistent/letter-renderer/assets")
}

/// Render onto a recording surface and return (page count, ops).
pub fn record(content: &LetterContent, config: &RendererConfig) -> (usize, Vec<DrawOp>) {
    let rendered = render_with(RecordingSurface::new(), content, config)
        .expect("Failed to render letter");
    let ops = RecordingSurface::parse_log(&rendered.bytes).expect("Failed to parse draw log");
    (rendered.page_count, ops)
}

pub fn text_ops(ops: &[DrawOp]) -> Vec<(usize, f64, f64, String, String)> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { page, x, y, text, font, .. } => {
                Some((*page, *x, *y, text.clone(), font.clone()))
            }
            _ => None,
        })
        .collect()
}

pub fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}
