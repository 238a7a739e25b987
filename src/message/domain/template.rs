//! Template payload types.
//!
//! A template message names a pre-approved template and fills its
//! placeholders through an ordered list of components.

use serde::{Deserialize, Serialize};

/// Template invocation carried by a template message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatePayload {
    /// Name of the approved template.
    pub name: String,
    /// Language the template was approved in.
    pub language: TemplateLanguage,
    /// Components in the order they were added.
    pub components: Vec<TemplateComponent>,
}

/// Language selector of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLanguage {
    /// Locale code such as `en_US` or `pt_BR`.
    pub code: String,
}

/// One structural block of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TemplateComponent {
    /// Header placeholder, at most one parameter.
    Header {
        /// Header parameters.
        parameters: Vec<ComponentParameter>,
    },
    /// Body placeholders.
    Body {
        /// Body parameters.
        parameters: Vec<ComponentParameter>,
    },
    /// Static footer text.
    Footer {
        /// Footer text.
        text: String,
    },
    /// Dynamic part of a template button.
    Button {
        /// Kind of button being filled.
        sub_type: ButtonSubType,
        /// Zero-based position of the button within the template.
        index: String,
        /// Button parameters.
        parameters: Vec<ComponentParameter>,
    },
}

impl TemplateComponent {
    /// Returns the component type as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Header { .. } => "header",
            Self::Body { .. } => "body",
            Self::Footer { .. } => "footer",
            Self::Button { .. } => "button",
        }
    }
}

/// Kind of template button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSubType {
    /// Button that posts a payload back to the business.
    QuickReply,
    /// Button that opens a URL with a dynamic suffix.
    Url,
}

/// A value substituted into a template placeholder.
///
/// # Examples
///
/// ```
/// use metakit_whatsapp::message::domain::{ComponentParameter, ParameterKind};
///
/// let parameter = ComponentParameter::text("Maria");
/// assert_eq!(parameter.kind(), ParameterKind::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComponentParameter {
    /// Literal text.
    Text {
        /// The text value.
        text: String,
        /// Name of the placeholder for named-parameter templates.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parameter_name: Option<String>,
    },
    /// A localisable amount of money.
    Currency {
        /// The currency value.
        currency: CurrencyValue,
    },
    /// A localisable date.
    DateTime {
        /// The date value.
        date_time: DateTimeValue,
    },
    /// An image by URL.
    Image {
        /// The image link.
        image: MediaLink,
    },
    /// A document by URL.
    Document {
        /// The document link.
        document: DocumentLink,
    },
    /// A video by URL.
    Video {
        /// The video link.
        video: MediaLink,
    },
    /// A quick-reply payload.
    Payload {
        /// The opaque payload string.
        payload: String,
    },
}

impl ComponentParameter {
    /// Creates a text parameter.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            parameter_name: None,
        }
    }

    /// Creates a named text parameter.
    #[must_use]
    pub fn named_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            parameter_name: Some(name.into()),
        }
    }

    /// Creates a currency parameter. `amount_1000` is the amount times 1000.
    #[must_use]
    pub fn currency(
        fallback_value: impl Into<String>,
        code: impl Into<String>,
        amount_1000: i64,
    ) -> Self {
        Self::Currency {
            currency: CurrencyValue {
                fallback_value: fallback_value.into(),
                code: code.into(),
                amount_1000,
            },
        }
    }

    /// Creates a date parameter.
    #[must_use]
    pub fn date_time(fallback_value: impl Into<String>) -> Self {
        Self::DateTime {
            date_time: DateTimeValue {
                fallback_value: fallback_value.into(),
            },
        }
    }

    /// Creates an image parameter.
    #[must_use]
    pub fn image(link: impl Into<String>) -> Self {
        Self::Image {
            image: MediaLink { link: link.into() },
        }
    }

    /// Creates a document parameter.
    #[must_use]
    pub fn document(link: impl Into<String>, filename: Option<String>) -> Self {
        Self::Document {
            document: DocumentLink {
                link: link.into(),
                filename,
            },
        }
    }

    /// Creates a video parameter.
    #[must_use]
    pub fn video(link: impl Into<String>) -> Self {
        Self::Video {
            video: MediaLink { link: link.into() },
        }
    }

    /// Creates a payload parameter.
    #[must_use]
    pub fn payload(payload: impl Into<String>) -> Self {
        Self::Payload {
            payload: payload.into(),
        }
    }

    /// Returns the parameter type.
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        match self {
            Self::Text { .. } => ParameterKind::Text,
            Self::Currency { .. } => ParameterKind::Currency,
            Self::DateTime { .. } => ParameterKind::DateTime,
            Self::Image { .. } => ParameterKind::Image,
            Self::Document { .. } => ParameterKind::Document,
            Self::Video { .. } => ParameterKind::Video,
            Self::Payload { .. } => ParameterKind::Payload,
        }
    }
}

/// The type tag of a [`ComponentParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// `text`
    Text,
    /// `currency`
    Currency,
    /// `date_time`
    DateTime,
    /// `image`
    Image,
    /// `document`
    Document,
    /// `video`
    Video,
    /// `payload`
    Payload,
}

impl ParameterKind {
    /// Returns the parameter type as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Currency => "currency",
            Self::DateTime => "date_time",
            Self::Image => "image",
            Self::Document => "document",
            Self::Video => "video",
            Self::Payload => "payload",
        }
    }
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Currency parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyValue {
    /// Text shown when localisation is unavailable.
    pub fallback_value: String,
    /// ISO 4217 currency code.
    pub code: String,
    /// Amount multiplied by 1000.
    pub amount_1000: i64,
}

/// Date parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeValue {
    /// Text shown when localisation is unavailable.
    pub fallback_value: String,
}

/// Media referenced by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaLink {
    /// Public URL of the media.
    pub link: String,
}

/// Document referenced by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLink {
    /// Public URL of the document.
    pub link: String,
    /// File name shown to the recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}
