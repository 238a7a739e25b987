//! The message envelope sent to the Cloud API `/messages` endpoint.
//!
//! A message is immutable once built. Its payload is a tagged union, so a
//! text message can never carry image fields.

use super::{InteractivePayload, MessageKind, TemplatePayload};
use serde::{Deserialize, Serialize};

/// The product identifier required on every outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MessagingProduct {
    /// The only product the endpoint accepts.
    #[default]
    #[serde(rename = "whatsapp")]
    WhatsApp,
}

/// The recipient category of an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    /// A single user, addressed by phone number.
    #[default]
    Individual,
}

/// An outbound message.
///
/// Messages produced by the builders in [`crate::message::builders`] have
/// passed every builder check.
///
/// # Serialisation
///
/// The payload is flattened into the envelope and keyed by its kind:
///
/// ```json
/// {
///   "messaging_product": "whatsapp",
///   "recipient_type": "individual",
///   "to": "5511999999999",
///   "type": "text",
///   "text": { "body": "Olá mundo!" }
/// }
/// ```
///
/// # Examples
///
/// ```
/// use metakit_whatsapp::message::builders::{MessageBuilder, TextMessageBuilder};
/// use metakit_whatsapp::message::domain::MessageKind;
///
/// let message = TextMessageBuilder::new()
///     .set_recipient("5511999999999")
///     .set_text("Olá mundo!")
///     .build()
///     .expect("valid message");
///
/// assert_eq!(message.kind(), MessageKind::Text);
/// assert_eq!(message.recipient(), "5511999999999");
/// ```
///
/// # Deserialisation
///
/// Deserialising checks the wire shape only. Builder limits such as text
/// lengths or button counts are not re-applied, so a deserialised message
/// is as valid as its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    messaging_product: MessagingProduct,
    recipient_type: RecipientType,
    to: String,
    #[serde(flatten)]
    payload: MessagePayload,
}

impl Message {
    /// Wraps a payload in the standard envelope.
    ///
    /// Only the builders construct messages, after validating their input.
    pub(crate) fn new(to: impl Into<String>, payload: MessagePayload) -> Self {
        Self {
            messaging_product: MessagingProduct::WhatsApp,
            recipient_type: RecipientType::Individual,
            to: to.into(),
            payload,
        }
    }

    /// Returns the recipient phone number or id.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.to
    }

    /// Returns the message kind.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.payload.kind()
    }

    /// Returns the kind-specific payload.
    #[must_use]
    pub const fn payload(&self) -> &MessagePayload {
        &self.payload
    }

    /// Returns the product identifier.
    #[must_use]
    pub const fn messaging_product(&self) -> MessagingProduct {
        self.messaging_product
    }

    /// Returns the recipient category.
    #[must_use]
    pub const fn recipient_type(&self) -> RecipientType {
        self.recipient_type
    }
}

/// The kind-specific part of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagePayload {
    /// Plain text.
    Text {
        /// The text body.
        text: TextBody,
    },
    /// An image referenced by URL.
    Image {
        /// The image reference.
        image: ImagePayload,
    },
    /// An audio clip.
    Audio {
        /// The audio reference.
        audio: AudioPayload,
    },
    /// A pre-approved template.
    Template {
        /// The template invocation.
        template: TemplatePayload,
    },
    /// An interactive message.
    Interactive {
        /// The interactive content.
        interactive: InteractivePayload,
    },
}

impl MessagePayload {
    /// Returns the discriminant of this payload.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::Text { .. } => MessageKind::Text,
            Self::Image { .. } => MessageKind::Image,
            Self::Audio { .. } => MessageKind::Audio,
            Self::Template { .. } => MessageKind::Template,
            Self::Interactive { .. } => MessageKind::Interactive,
        }
    }
}

/// Body of a text message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    /// The text to deliver.
    pub body: String,
}

/// Image reference of an image message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Public URL of the image.
    pub link: String,
    /// Optional caption shown under the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Audio reference of an audio message.
///
/// Exactly one of `id` and `link` is set on a built message. The unset one
/// is omitted from the wire payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioPayload {
    /// Media id of previously uploaded audio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Public URL of the audio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
