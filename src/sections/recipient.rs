//! Addressee block below the connector word

use crate::error::RendererResult;
use crate::layout::RECIPIENT_PREFIX;
use crate::session::Session;
use crate::surface::DrawingSurface;
use crate::types::LetterContent;

pub fn recipient_line(receiver_service: &str) -> String {
    format!("{}{}", RECIPIENT_PREFIX, receiver_service.to_uppercase())
}

pub struct RecipientRenderer;

impl RecipientRenderer {
    pub fn render<S: DrawingSurface>(
        session: &mut Session<'_, S>,
        content: &LetterContent,
    ) -> RendererResult<()> {
        let layout = &session.template().recipient;
        session.wrapped(
            &layout.recipient,
            &recipient_line(&content.receiver_service),
            layout.line_height,
        )?;
        Ok(())
    }
}
