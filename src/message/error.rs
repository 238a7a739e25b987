//! Error types for message building and delivery.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use super::{
    domain::{InteractiveType, ParameterKind},
    ports::transport::ResponseData,
};
use thiserror::Error;

/// Errors raised by the message builders.
///
/// Builders fail at the point of violation: setters and action constructors
/// check their own input immediately, while `build` checks that every
/// required field has been supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A text message is missing its recipient or body.
    #[error("Recipient and text are required")]
    MissingRecipientOrText,

    /// An image message is missing its recipient or link.
    #[error("Recipient and image are required")]
    MissingRecipientOrImage,

    /// The recipient was not supplied.
    #[error("Recipient is required")]
    MissingRecipient,

    /// Neither an audio id nor an audio link was supplied.
    #[error("The audio id or link is required")]
    MissingAudioSource,

    /// Both an audio id and an audio link were supplied.
    #[error("Cannot provide both audio id and audio link")]
    ConflictingAudioSource,

    /// A template message is missing its recipient, name or language.
    #[error("Recipient, template name, and language code are required")]
    MissingTemplateFields,

    /// A second component of a single-instance kind was added.
    #[error("Template can only have one {0} component")]
    DuplicateComponent(&'static str),

    /// More than one parameter was passed to a template header.
    #[error("Header can only have one parameter")]
    TooManyHeaderParameters,

    /// A parameter type is not permitted in the given component.
    #[error("Invalid parameter type for {component}: {kind}")]
    InvalidParameterType {
        /// The component the parameter was offered to.
        component: &'static str,
        /// The rejected parameter type.
        kind: ParameterKind,
    },

    /// The template already holds the maximum number of buttons.
    #[error("Maximum number of buttons ({max}) exceeded")]
    TooManyTemplateButtons {
        /// The maximum number of button components.
        max: usize,
    },

    /// A text field is longer than the provider accepts.
    #[error("{field} cannot exceed {max} characters")]
    TextTooLong {
        /// Human-readable name of the field.
        field: &'static str,
        /// The maximum length in characters.
        max: usize,
        /// The measured length in characters.
        actual: usize,
    },

    /// A list message has more sections than allowed.
    #[error("Cannot have more than {max} sections")]
    TooManySections {
        /// The maximum number of sections.
        max: usize,
    },

    /// A list message has no sections.
    #[error("Must have at least one section")]
    NoSections,

    /// A list section has no rows.
    #[error("Each section must have at least one row")]
    EmptySection,

    /// A button message has no buttons.
    #[error("Must have at least one button")]
    NoButtons,

    /// A button message has more buttons than allowed.
    #[error("Cannot have more than {max} buttons")]
    TooManyButtons {
        /// The maximum number of reply buttons.
        max: usize,
    },

    /// A reply button id carries leading or trailing whitespace.
    #[error("Button ID cannot have leading or trailing spaces: '{0}'")]
    UntrimmedButtonId(String),

    /// An action was offered to an interactive message of another type.
    #[error("Cannot add {action} action to non-{action} message type")]
    ActionTypeMismatch {
        /// The action that was rejected.
        action: &'static str,
    },

    /// The stored action belongs to a different sub-kind than the message.
    #[error("{action} action does not match {kind} message type")]
    ActionKindMismatch {
        /// The sub-kind selected on the builder.
        kind: InteractiveType,
        /// The sub-kind of the stored action.
        action: InteractiveType,
    },

    /// An interactive message has no body.
    #[error("Body is required")]
    MissingBody,

    /// An interactive message has no action.
    #[error("Action is required")]
    MissingAction,
}

impl ValidationError {
    /// Creates a text length error.
    #[must_use]
    pub const fn text_too_long(field: &'static str, max: usize, actual: usize) -> Self {
        Self::TextTooLong { field, max, actual }
    }
}

/// Errors raised by a transport while performing a request.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// A response declared JSON but its body did not parse.
    #[error("malformed JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A header name or value could not be encoded.
    #[error("invalid header '{0}'")]
    InvalidHeader(String),
}

impl TransportError {
    /// Creates a network error from any displayable cause.
    #[must_use]
    pub fn network(cause: impl std::fmt::Display) -> Self {
        Self::Network(cause.to_string())
    }
}

/// Errors raised while delivering a message to the provider.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The provider answered with a failure status.
    #[error("failed to send message: {status} - {}", .body.to_json_string())]
    Rejected {
        /// The HTTP status code.
        status: u16,
        /// The response payload as returned by the transport.
        body: ResponseData,
    },

    /// The transport failed before a status was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The message could not be serialized.
    #[error("failed to serialize message: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DeliveryError {
    /// Returns the HTTP status if the provider rejected the message.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(_) | Self::Serialization(_) => None,
        }
    }
}
