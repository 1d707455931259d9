//! Section renderers
//!
//! Each renderer draws one fixed region of the letter into the shared
//! [`Session`](crate::session::Session). They run once per document, in the
//! order header, recipient, reference, body. Only the body moves the cursor.

mod body;
mod header;
mod recipient;
mod reference;

pub use body::BodyRenderer;
pub use header::{sender_title, HeaderRenderer};
pub use recipient::{recipient_line, RecipientRenderer};
pub use reference::{object_line, reference_line, ReferenceRenderer};
