//! Builder for text messages.

use super::MessageBuilder;
use crate::message::{
    domain::{Message, MessagePayload, TextBody},
    error::ValidationError,
};

/// Builds a plain text message.
///
/// # Examples
///
/// ```
/// use metakit_whatsapp::message::builders::{MessageBuilder, TextMessageBuilder};
///
/// let message = TextMessageBuilder::new()
///     .set_recipient("5511999999999")
///     .set_text("Olá mundo!")
///     .build()
///     .expect("valid message");
/// assert_eq!(message.recipient(), "5511999999999");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextMessageBuilder {
    to: String,
    text: String,
}

impl TextMessageBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text body.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }
}

impl MessageBuilder for TextMessageBuilder {
    fn set_recipient(&mut self, to: impl Into<String>) -> &mut Self {
        self.to = to.into();
        self
    }

    fn build(&self) -> Result<Message, ValidationError> {
        if self.to.is_empty() || self.text.is_empty() {
            return Err(ValidationError::MissingRecipientOrText);
        }

        Ok(Message::new(
            self.to.clone(),
            MessagePayload::Text {
                text: TextBody {
                    body: self.text.clone(),
                },
            },
        ))
    }
}
