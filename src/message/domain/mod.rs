//! Domain types for outbound messages.
//!
//! This module contains pure wire types with no infrastructure dependencies.
//! All types are immutable values and serialisable via serde.

mod interactive;
mod kind;
mod message;
mod template;

pub use interactive::{
    ButtonAction, ButtonReply, DocumentReference, InteractiveAction, InteractiveHeader,
    InteractivePayload, InteractiveType, ListAction, ListRow, ListSection, LocationRequestAction,
    LocationRequestName, MediaProvider, MediaReference, ReplyButton, TextBlock,
};
pub use kind::{MessageKind, ParseMessageKindError};
pub use message::{
    AudioPayload, ImagePayload, Message, MessagePayload, MessagingProduct, RecipientType, TextBody,
};
pub use template::{
    ButtonSubType, ComponentParameter, CurrencyValue, DateTimeValue, DocumentLink, MediaLink,
    ParameterKind, TemplateComponent, TemplateLanguage, TemplatePayload,
};
