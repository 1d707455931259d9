//! Letterhead: emblems, republic captions, ministry block, date and sender title

use log::debug;

use crate::error::RendererResult;
use crate::layout::{CONNECTOR, DATE_PREFIX, REPUBLIC_MOTTO, REPUBLIC_TITLE, SENDER_SEPARATOR, TITLE_PREFIX};
use crate::session::Session;
use crate::surface::DrawingSurface;
use crate::types::LetterContent;

/// Title of the signing officer derived from the issuing service name.
///
/// "SERVICE DU SYSTEME D'INFORMATION FISCALE" becomes
/// "LE CHEF DU SYSTEME D'INFORMATION FISCALE".
pub fn sender_title(sender_service: &str) -> String {
    let service = sender_service
        .to_uppercase()
        .replace("SERVICE DU ", "")
        .replace("SERVICE ", "");
    format!("{}{}", TITLE_PREFIX, service)
}

pub struct HeaderRenderer;

impl HeaderRenderer {
    pub fn render<S: DrawingSurface>(
        session: &mut Session<'_, S>,
        content: &LetterContent,
    ) -> RendererResult<()> {
        let header = &session.template().header;

        // Top centre
        if !session.emblem(&header.republic_emblem)? {
            debug!("Republic emblem not installed");
        }
        session.centred(&header.republic_title, REPUBLIC_TITLE)?;
        session.centred(&header.republic_motto, REPUBLIC_MOTTO)?;
        let (x1, x2, y, width) = header.rule;
        session.line(x1, y, x2, y, width)?;

        // Left: ministry
        if !session.emblem(&header.ministry_emblem)? {
            debug!("Ministry emblem not installed");
        }
        for (caption, placement) in &header.ministry_lines {
            session.centred(placement, caption)?;
        }
        session.centred(&header.sender_service, &content.sender_service.to_uppercase())?;
        session.centred(&header.sender_separator, SENDER_SEPARATOR)?;

        // Right: date, sender title, connector
        session.placed(&header.date, &format!("{}{}", DATE_PREFIX, content.date))?;
        session.wrapped(
            &header.sender_title,
            &sender_title(&content.sender_service),
            header.sender_title_line_height,
        )?;
        session.centred(&header.connector, CONNECTOR)?;

        debug!("Header drawn for {}", content.sender_service);
        Ok(())
    }
}
