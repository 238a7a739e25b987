//! Builder for audio messages.

use super::MessageBuilder;
use crate::message::{
    domain::{AudioPayload, Message, MessagePayload},
    error::ValidationError,
};

/// Builds an audio message referencing either an uploaded media id or a
/// public link.
///
/// Both sources may be set while building; `build` rejects the message
/// unless exactly one is present.
#[derive(Debug, Clone, Default)]
pub struct AudioMessageBuilder {
    to: String,
    id: String,
    link: String,
}

impl AudioMessageBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media id of previously uploaded audio.
    pub fn set_audio_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = id.into();
        self
    }

    /// Sets the public URL of the audio.
    pub fn set_audio_link(&mut self, link: impl Into<String>) -> &mut Self {
        self.link = link.into();
        self
    }
}

impl MessageBuilder for AudioMessageBuilder {
    fn set_recipient(&mut self, to: impl Into<String>) -> &mut Self {
        self.to = to.into();
        self
    }

    fn build(&self) -> Result<Message, ValidationError> {
        if self.to.is_empty() {
            return Err(ValidationError::MissingRecipient);
        }

        let audio = match (self.id.is_empty(), self.link.is_empty()) {
            (true, true) => return Err(ValidationError::MissingAudioSource),
            (false, false) => return Err(ValidationError::ConflictingAudioSource),
            (false, true) => AudioPayload {
                id: Some(self.id.clone()),
                link: None,
            },
            (true, false) => AudioPayload {
                id: None,
                link: Some(self.link.clone()),
            },
        };

        Ok(Message::new(self.to.clone(), MessagePayload::Audio { audio }))
    }
}
