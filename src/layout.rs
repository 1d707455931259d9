//! Fixed letter template
//!
//! All positions are millimetres on an A4 page, measured from the bottom-left
//! corner. `y` is the text baseline. The drawing surface converts to its own
//! unit when it emits.

use crate::font_registry::{FONT_BOLD, FONT_REGULAR};
use crate::types::Rect;

/// Where and how one piece of template text is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    /// Column width for wrapped text; 0 for single-line text.
    pub width: f64,
    pub font: &'static str,
    pub size: f64,
}

impl Placement {
    pub const fn new(x: f64, y: f64, width: f64, font: &'static str, size: f64) -> Self {
        Self { x, y, width, font, size }
    }

    pub const fn at(x: f64, y: f64, font: &'static str, size: f64) -> Self {
        Self::new(x, y, 0.0, font, size)
    }

    /// Same placement moved to another baseline.
    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }
}

/// An emblem frame and the file names tried, in order, under the assets directory.
#[derive(Debug, Clone, PartialEq)]
pub struct EmblemSlot {
    pub frame: Rect,
    pub candidates: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLayout {
    pub republic_emblem: EmblemSlot,
    pub republic_title: Placement,
    pub republic_motto: Placement,
    /// Horizontal rule: (x1, x2, y, width in pt)
    pub rule: (f64, f64, f64, f64),
    pub ministry_emblem: EmblemSlot,
    /// Centred captions of the ministry block; the sender service follows them.
    pub ministry_lines: Vec<(&'static str, Placement)>,
    pub sender_service: Placement,
    pub sender_separator: Placement,
    pub date: Placement,
    pub sender_title: Placement,
    pub sender_title_line_height: f64,
    pub connector: Placement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipientLayout {
    pub recipient: Placement,
    pub line_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLayout {
    pub reference: Placement,
    pub object: Placement,
    pub importance_font: &'static str,
    /// Gap between the end of the object text and the importance annotation.
    pub importance_gap: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyLayout {
    pub greeting: Placement,
    /// Advance after the greeting line.
    pub greeting_advance: f64,
    /// Left margin and column width for paragraphs.
    pub text: Placement,
    pub line_height: f64,
    pub blank_height: f64,
    pub row_height: f64,
    pub key_x: f64,
    pub value_x: f64,
    /// The cursor going below this triggers a page break.
    pub bottom_margin: f64,
    /// Cursor position on every continuation page.
    pub continuation_top: f64,
    pub closing_advance: f64,
}

/// The whole letter template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub page: Rect,
    pub header: HeaderLayout,
    pub recipient: RecipientLayout,
    pub reference: ReferenceLayout,
    pub body: BodyLayout,
}

pub const REPUBLIC_TITLE: &str = "REPOBLIKAN'I MADAGASIKARA";
pub const REPUBLIC_MOTTO: &str = "Fitiavana - Tanindrazana - Fandrosoana";
pub const SENDER_SEPARATOR: &str = "---";
pub const DATE_PREFIX: &str = "Antananarivo, le ";
pub const TITLE_PREFIX: &str = "LE CHEF DU ";
pub const RECIPIENT_PREFIX: &str = "MONSIEUR LE CHEF DU ";
pub const CONNECTOR: &str = "à";
pub const REFERENCE_SUFFIX: &str = "/MEF/SG/DGI/SSIF";
pub const OBJECT_PREFIX: &str = "Objet : ";
pub const GREETING: &str = "Monsieur le Chef du service,";
pub const CLOSING_LINES: [&str; 2] = [
    "        Je vous prie d'agréer, Monsieur le Chef du service, l'expression de mes salutations",
    "distinguées.",
];

impl Default for Template {
    fn default() -> Self {
        let ministry_x = 46.0;
        Self {
            page: Rect::new(0.0, 0.0, crate::geometry::A4_WIDTH_MM, crate::geometry::A4_HEIGHT_MM),
            header: HeaderLayout {
                republic_emblem: EmblemSlot {
                    frame: Rect::new(92.5, 270.0, 25.0, 20.0),
                    candidates: vec!["logo_republic.png", "logo_republic.jpg"],
                },
                republic_title: Placement::at(105.0, 266.0, FONT_BOLD, 9.0),
                republic_motto: Placement::at(105.0, 263.0, FONT_REGULAR, 8.0),
                rule: (25.0, 185.0, 260.0, 0.5),
                ministry_emblem: EmblemSlot {
                    frame: Rect::new(35.0, 235.0, 22.0, 22.0),
                    candidates: vec!["logo_mef.png"],
                },
                ministry_lines: vec![
                    (
                        "MINISTERE DE L'ECONOMIE ET DES FINANCES",
                        Placement::at(ministry_x, 232.0, FONT_REGULAR, 9.0),
                    ),
                    ("SECRETARIAT GENERAL", Placement::at(ministry_x, 228.0, FONT_REGULAR, 9.0)),
                    (
                        "DIRECTION GENERALE DES IMPOTS",
                        Placement::at(ministry_x, 224.0, FONT_REGULAR, 9.0),
                    ),
                ],
                sender_service: Placement::at(ministry_x, 220.0, FONT_BOLD, 9.0),
                sender_separator: Placement::at(ministry_x, 217.0, FONT_REGULAR, 9.0),
                date: Placement::at(120.0, 235.0, FONT_REGULAR, 11.0),
                sender_title: Placement::new(120.0, 225.0, 80.0, FONT_BOLD, 10.0),
                sender_title_line_height: 5.0,
                connector: Placement::at(160.0, 210.0, FONT_REGULAR, 11.0),
            },
            recipient: RecipientLayout {
                recipient: Placement::new(120.0, 200.0, 80.0, FONT_BOLD, 10.0),
                line_height: 5.0,
            },
            reference: ReferenceLayout {
                reference: Placement::at(25.0, 180.0, FONT_REGULAR, 11.0),
                object: Placement::at(25.0, 170.0, FONT_REGULAR, 11.0),
                importance_font: FONT_BOLD,
                importance_gap: 2.0,
            },
            body: BodyLayout {
                greeting: Placement::at(35.0, 155.0, FONT_REGULAR, 11.0),
                greeting_advance: 10.0,
                text: Placement::new(25.0, 145.0, 165.0, FONT_REGULAR, 11.0),
                line_height: 5.0,
                blank_height: 5.0,
                row_height: 6.0,
                key_x: 45.0,
                value_x: 90.0,
                bottom_margin: 20.0,
                continuation_top: 270.0,
                closing_advance: 5.0,
            },
        }
    }
}
