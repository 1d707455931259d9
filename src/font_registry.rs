//! Font registry: name lookup and text measurement
//!
//! Only fonts registered here may be used by the template. Measurement is a
//! pure table lookup, so it is deterministic for a given registry.

use std::collections::HashMap;

use crate::error::{RendererError, RendererResult};
use crate::font_metrics::{FontMetrics, TIMES_BOLD, TIMES_ROMAN};
use crate::geometry::pt_to_mm;

pub const FONT_REGULAR: &str = "Times-Roman";
pub const FONT_BOLD: &str = "Times-Bold";

pub struct FontRegistry {
    fonts: HashMap<&'static str, &'static FontMetrics>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self {
            fonts: HashMap::new(),
        }
    }

    /// Registry holding the two faces the letter template uses.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(&TIMES_ROMAN);
        registry.register(&TIMES_BOLD);
        registry
    }

    pub fn register(&mut self, metrics: &'static FontMetrics) {
        self.fonts.insert(metrics.name, metrics);
    }

    pub fn contains(&self, font_name: &str) -> bool {
        self.fonts.contains_key(font_name)
    }

    pub fn get(&self, font_name: &str) -> RendererResult<&'static FontMetrics> {
        self.fonts.get(font_name).copied().ok_or_else(|| {
            RendererError::configuration(format!("font not registered: {}", font_name))
        })
    }

    /// Rendered width of `text` in document units (mm).
    pub fn measure(&self, text: &str, font_name: &str, font_size: f64) -> RendererResult<f64> {
        let metrics = self.get(font_name)?;
        Ok(pt_to_mm(metrics.string_width_pt(text, font_size)))
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::mm_to_pt;

    #[test]
    fn test_measure_is_in_millimetres() {
        let registry = FontRegistry::standard();
        let width = registry.measure("NIF", FONT_REGULAR, 11.0).unwrap();
        assert!((mm_to_pt(width) - 17.721).abs() < 1e-9);
    }

    #[test]
    fn test_measure_is_deterministic() {
        let registry = FontRegistry::standard();
        let text = "Demande d'information fiscale";
        let first = registry.measure(text, FONT_BOLD, 10.0).unwrap();
        let second = registry.measure(text, FONT_BOLD, 10.0).unwrap();
        assert_eq!(first, second);
        assert!(first > registry.measure(text, FONT_BOLD, 9.0).unwrap());
    }

    #[test]
    fn test_unknown_font_is_configuration_error() {
        let registry = FontRegistry::standard();
        let err = registry.measure("abc", "Helvetica", 11.0).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("Helvetica"));
    }

    #[test]
    fn test_empty_registry_has_no_fonts() {
        let registry = FontRegistry::new();
        assert!(!registry.contains(FONT_REGULAR));
        assert!(registry.get(FONT_REGULAR).is_err());
    }
}
