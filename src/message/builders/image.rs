//! Builder for image messages.

use super::MessageBuilder;
use crate::message::{
    domain::{ImagePayload, Message, MessagePayload},
    error::ValidationError,
};

/// Builds an image message from a public URL.
#[derive(Debug, Clone, Default)]
pub struct ImageMessageBuilder {
    to: String,
    link: String,
    caption: Option<String>,
}

impl ImageMessageBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the public URL of the image.
    pub fn set_image_link(&mut self, link: impl Into<String>) -> &mut Self {
        self.link = link.into();
        self
    }

    /// Sets the caption. The caption is passed through unchanged.
    pub fn set_caption(&mut self, caption: impl Into<String>) -> &mut Self {
        self.caption = Some(caption.into());
        self
    }
}

impl MessageBuilder for ImageMessageBuilder {
    fn set_recipient(&mut self, to: impl Into<String>) -> &mut Self {
        self.to = to.into();
        self
    }

    fn build(&self) -> Result<Message, ValidationError> {
        if self.to.is_empty() || self.link.is_empty() {
            return Err(ValidationError::MissingRecipientOrImage);
        }

        Ok(Message::new(
            self.to.clone(),
            MessagePayload::Image {
                image: ImagePayload {
                    link: self.link.clone(),
                    caption: self.caption.clone(),
                },
            },
        ))
    }
}
