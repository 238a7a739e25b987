//! Fluent builders producing validated [`Message`] values.
//!
//! Every builder is a mutable accumulator. Setters return `&mut Self` so
//! calls chain; setters with their own limits return
//! `Result<&mut Self, ValidationError>` and fail immediately. `build`
//! checks that all required fields are present and may be called again
//! after further changes, each call yielding an independent message.
//!
//! # Example
//!
//! ```
//! use metakit_whatsapp::message::builders::{InteractiveMessageBuilder, MessageBuilder};
//! use metakit_whatsapp::message::domain::ReplyButton;
//! use metakit_whatsapp::message::error::ValidationError;
//!
//! fn confirmation() -> Result<(), ValidationError> {
//!     let message = InteractiveMessageBuilder::new()
//!         .set_recipient("5511999999999")
//!         .set_button_type()
//!         .set_body("Confirm your booking?")?
//!         .create_button_action(vec![
//!             ReplyButton::new("yes", "Yes"),
//!             ReplyButton::new("no", "No"),
//!         ])?
//!         .build()?;
//!     assert_eq!(message.recipient(), "5511999999999");
//!     Ok(())
//! }
//! # confirmation().expect("valid message");
//! ```

mod audio;
mod image;
mod interactive;
mod template;
mod text;

pub use audio::AudioMessageBuilder;
pub use image::ImageMessageBuilder;
pub use interactive::InteractiveMessageBuilder;
pub use template::TemplateMessageBuilder;
pub use text::TextMessageBuilder;

use super::{domain::Message, error::ValidationError};

/// Operations shared by every message builder.
pub trait MessageBuilder {
    /// Sets the recipient phone number or id.
    fn set_recipient(&mut self, to: impl Into<String>) -> &mut Self;

    /// Validates the accumulated state and produces a message.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a required field is missing or
    /// fields conflict.
    fn build(&self) -> Result<Message, ValidationError>;
}

/// Fails when `text` holds more than `max` characters.
fn ensure_max_chars(field: &'static str, text: &str, max: usize) -> Result<(), ValidationError> {
    let actual = text.chars().count();
    if actual > max {
        return Err(ValidationError::text_too_long(field, max, actual));
    }
    Ok(())
}
