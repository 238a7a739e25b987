//! The discriminant tag carried by every message.

use serde::{Deserialize, Serialize};

/// The kind of payload a [`super::Message`] carries.
///
/// Serialised as the `type` field of the message envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Plain text.
    Text,
    /// An image referenced by URL.
    Image,
    /// An audio clip referenced by media id or URL.
    Audio,
    /// A pre-approved template.
    Template,
    /// A list, reply-button or location-request message.
    Interactive,
}

impl MessageKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Template => "template",
            Self::Interactive => "interactive",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an invalid message kind string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMessageKindError(String);

impl std::fmt::Display for ParseMessageKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid message kind: '{}'", self.0)
    }
}

impl std::error::Error for ParseMessageKindError {}

impl TryFrom<&str> for MessageKind {
    type Error = ParseMessageKindError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            "template" => Ok(Self::Template),
            "interactive" => Ok(Self::Interactive),
            _ => Err(ParseMessageKindError(s.to_owned())),
        }
    }
}

impl std::str::FromStr for MessageKind {
    type Err = ParseMessageKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
