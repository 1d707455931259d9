//! Type definitions for letter rendering

use serde::{Deserialize, Serialize};

/// Rectangle with position and size, in document units (mm).
///
/// `y` is the bottom edge; the coordinate system grows upward from the
/// bottom-left corner of the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// The semantic fields of one administrative letter.
///
/// Field names on the wire are camelCase, matching what the extraction and
/// drafting services upstream produce. Every field accepts arbitrary text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterContent {
    pub sender_service: String,
    pub receiver_service: String,
    pub date: String,
    pub letter_number: String,
    pub subject: String,
    pub importance: String,
    /// Raw body text; line breaks separate paragraphs and table rows.
    pub body: String,
}

impl LetterContent {
    /// Parse the JSON document handed over by the upstream services.
    pub fn from_json(json: &str) -> crate::error::RendererResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn importance(&self) -> Importance {
        Importance::from_label(&self.importance)
    }
}

/// Urgency level of a letter.
///
/// Matching is an exact, case-insensitive comparison against the three known
/// labels; anything else is kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Importance {
    Normal,
    Urgent,
    VeryUrgent,
    Other(String),
}

impl Importance {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "normal" => Importance::Normal,
            "urgent" => Importance::Urgent,
            "très urgent" => Importance::VeryUrgent,
            _ => Importance::Other(label.to_string()),
        }
    }

    /// Whether the object line gets a bold "(label)" annotation.
    ///
    /// An empty label is treated like `Normal`.
    pub fn is_annotated(&self) -> bool {
        match self {
            Importance::Normal => false,
            Importance::Other(label) => !label.is_empty(),
            _ => true,
        }
    }
}
