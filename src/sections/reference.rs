//! Reference number and object line, with the optional urgency annotation

use log::debug;

use crate::error::RendererResult;
use crate::layout::{OBJECT_PREFIX, REFERENCE_SUFFIX};
use crate::session::Session;
use crate::surface::DrawingSurface;
use crate::types::LetterContent;

pub fn reference_line(letter_number: &str) -> String {
    format!("N° {} {}", letter_number, REFERENCE_SUFFIX)
}

pub fn object_line(subject: &str) -> String {
    format!("{}{}", OBJECT_PREFIX, subject)
}

pub struct ReferenceRenderer;

impl ReferenceRenderer {
    pub fn render<S: DrawingSurface>(
        session: &mut Session<'_, S>,
        content: &LetterContent,
    ) -> RendererResult<()> {
        let layout = &session.template().reference;

        session.placed(&layout.reference, &reference_line(&content.letter_number))?;

        let object = object_line(&content.subject);
        session.placed(&layout.object, &object)?;

        let importance = content.importance();
        if importance.is_annotated() {
            let width = session.measure(&object, layout.object.font, layout.object.size)?;
            let x = layout.object.x + width + layout.importance_gap;
            debug!("Importance {:?} annotated at x={:.2}", importance, x);
            session.text(
                x,
                layout.object.y,
                &format!("({})", content.importance),
                layout.importance_font,
                layout.object.size,
            )?;
        }
        Ok(())
    }
}
