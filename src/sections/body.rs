//! Letter body: greeting, paragraphs and table rows, closing formula
//!
//! This is the only section that moves the cursor and breaks pages. The
//! bottom margin is checked once after each raw body line, so a long
//! paragraph that starts above the margin is finished on the same page even
//! when its last wrapped lines run past it.

use log::debug;

use crate::body_line::{classify_body, BodyLine};
use crate::error::RendererResult;
use crate::layout::{BodyLayout, CLOSING_LINES, GREETING};
use crate::session::Session;
use crate::surface::DrawingSurface;
use crate::text_layout::LineBreaker;
use crate::types::LetterContent;

pub struct BodyRenderer;

impl BodyRenderer {
    pub fn render<S: DrawingSurface>(
        session: &mut Session<'_, S>,
        content: &LetterContent,
    ) -> RendererResult<()> {
        let layout = &session.template().body;

        let y = session.cursor();
        session.placed(&layout.greeting.with_y(y), GREETING)?;
        session.advance(layout.greeting_advance);

        let lines = classify_body(&content.body);
        debug!("Body has {} raw lines", lines.len());
        let breaker = LineBreaker::new(layout.text.width);

        for line in &lines {
            match line {
                BodyLine::Blank => session.advance(layout.blank_height),
                BodyLine::TableRow { key, value } => Self::table_row(session, layout, key, value)?,
                BodyLine::Paragraph(text) => {
                    let wrapped = breaker.break_text(
                        text,
                        layout.text.font,
                        layout.text.size,
                        session.fonts(),
                    )?;
                    for sub_line in &wrapped {
                        let y = session.cursor();
                        session.placed(&layout.text.with_y(y), sub_line)?;
                        session.advance(layout.line_height);
                    }
                }
            }
            session.check_break(layout.bottom_margin)?;
        }

        for closing in CLOSING_LINES {
            session.advance(layout.closing_advance);
            let y = session.cursor();
            session.placed(&layout.text.with_y(y), closing)?;
        }

        debug!("Body finished on page {}", session.page_count());
        Ok(())
    }

    fn table_row<S: DrawingSurface>(
        session: &mut Session<'_, S>,
        layout: &BodyLayout,
        key: &str,
        value: &str,
    ) -> RendererResult<()> {
        let y = session.cursor();
        let (font, size) = (layout.text.font, layout.text.size);
        session.text(layout.key_x, y, &format!("{} :", key), font, size)?;
        session.text(layout.value_x, y, value, font, size)?;
        session.advance(layout.row_height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_registry::FONT_REGULAR;
    use crate::sections::test_support::{record, scenario_a, texts};
    use crate::surface::DrawOp;

    fn page_breaks(ops: &[DrawOp]) -> usize {
        ops.iter()
            .filter(|op| matches!(op, DrawOp::PageBreak { .. }))
            .count()
    }

    #[test]
    fn test_scenario_a_rows() {
        let texts = texts(&record(&scenario_a(), BodyRenderer::render));
        assert_eq!(texts[0], (35.0, 155.0, GREETING.to_string(), FONT_REGULAR.to_string()));

        let keys: Vec<_> = texts.iter().filter(|(x, ..)| *x == 45.0).collect();
        let values: Vec<_> = texts.iter().filter(|(x, ..)| *x == 90.0).collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(values.len(), 2);
        assert_eq!((keys[0].1, keys[0].2.as_str()), (145.0, "NIF :"));
        assert_eq!((values[0].1, values[0].2.as_str()), (145.0, "4001939516"));
        assert_eq!((keys[1].1, keys[1].2.as_str()), (139.0, "Raison sociale :"));
        assert_eq!(values[1].2, "SIAM MADAGASCAR SARLU");
    }

    #[test]
    fn test_closing_lines_follow_last_row() {
        let texts = texts(&record(&scenario_a(), BodyRenderer::render));
        let n = texts.len();
        // Cursor after the two rows: 145 - 6 - 6 = 133
        assert_eq!((texts[n - 2].0, texts[n - 2].1), (25.0, 128.0));
        assert_eq!(texts[n - 2].2, CLOSING_LINES[0]);
        assert_eq!((texts[n - 1].0, texts[n - 1].1), (25.0, 123.0));
        assert_eq!(texts[n - 1].2, "distinguées.");
    }

    #[test]
    fn test_blank_lines_only_advance() {
        let mut content = scenario_a();
        content.body = "\n   \n\t\nNIF : 1".to_string();
        let texts = texts(&record(&content, BodyRenderer::render));
        let key = texts.iter().find(|(x, ..)| *x == 45.0).unwrap();
        assert_eq!(key.1, 130.0);
    }

    #[test]
    fn test_paragraph_is_indented_and_wrapped() {
        let mut content = scenario_a();
        content.body = "J'ai l'honneur de vous demander de bien vouloir nous fournir dans les \
            meilleurs délais les noms du propriétaire et du gérant, les photocopies des statuts, \
            avis d'imposition et les situations fiscales de la société ci-après."
            .to_string();
        let texts = texts(&record(&content, BodyRenderer::render));
        let paragraph: Vec<_> = texts[1..texts.len() - 2].to_vec();
        assert!(paragraph.len() >= 2);
        assert!(paragraph[0].2.starts_with("        J'ai"));
        for (i, (x, y, _, _)) in paragraph.iter().enumerate() {
            assert_eq!(*x, 25.0);
            assert_eq!(*y, 145.0 - 5.0 * i as f64);
        }
    }

    #[test]
    fn test_overflow_breaks_page_and_resets_cursor() {
        let mut content = scenario_a();
        content.body = vec!["Code : X"; 40].join("\n");
        let ops = record(&content, BodyRenderer::render);
        assert_eq!(page_breaks(&ops), 1);

        // 145 - 21 * 6 = 19 < 20 triggers the break after the 21st row
        let rows: Vec<(usize, f64)> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { page, x, y, .. } if *x == 45.0 => Some((*page, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(rows[20], (0, 25.0));
        assert_eq!(rows[21], (1, 270.0));
    }

    #[test]
    fn test_long_paragraph_may_cross_margin_before_break() {
        let mut content = scenario_a();
        let filler = vec!["Ligne courte"; 24].join("\n");
        let long = vec!["mot"; 200].join(" ");
        content.body = format!("{}\n{}", filler, long);
        let ops = record(&content, BodyRenderer::render);

        // Short lines bring the cursor to 25; the long paragraph starts there
        // and keeps going below the margin on page 0.
        let below_margin = ops.iter().any(|op| {
            matches!(op, DrawOp::Text { page: 0, y, .. } if *y < 20.0)
        });
        assert!(below_margin);
        assert_eq!(page_breaks(&ops), 1);
    }

    fn closing_baselines(body: &str) -> (f64, f64) {
        let mut content = scenario_a();
        content.body = body.to_string();
        let texts = texts(&record(&content, BodyRenderer::render));
        let n = texts.len();
        (texts[n - 2].1, texts[n - 1].1)
    }

    #[test]
    fn test_trailing_newline_advances_one_blank_line() {
        assert_eq!(closing_baselines("NIF : 1"), (134.0, 129.0));
        assert_eq!(closing_baselines("NIF : 1\n"), (129.0, 124.0));
    }

    #[test]
    fn test_empty_body_advances_one_blank_line() {
        // 145 - 5 (blank) - 5 (closing advance)
        assert_eq!(closing_baselines(""), (135.0, 130.0));
    }
}
