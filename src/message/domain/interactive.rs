//! Interactive payload types: list, reply-button and location-request
//! messages.

use serde::{Deserialize, Serialize};

/// Interactive content carried by an interactive message.
///
/// `header` and `footer` are omitted from the wire payload when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractivePayload {
    /// The interactive sub-kind.
    #[serde(rename = "type")]
    pub kind: InteractiveType,
    /// Optional header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<InteractiveHeader>,
    /// Required body.
    pub body: TextBlock,
    /// Optional footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<TextBlock>,
    /// The action matching `kind`.
    pub action: InteractiveAction,
}

/// Interactive message sub-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractiveType {
    /// Pick one row from a sectioned list.
    #[default]
    #[serde(rename = "list")]
    List,
    /// Tap one of up to three reply buttons.
    #[serde(rename = "button")]
    Button,
    /// Share the current location.
    #[serde(rename = "location_request_message")]
    LocationRequest,
}

impl InteractiveType {
    /// Returns the sub-kind as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Button => "button",
            Self::LocationRequest => "location_request_message",
        }
    }
}

impl std::fmt::Display for InteractiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Header of an interactive message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractiveHeader {
    /// Text header, at most 60 characters.
    Text {
        /// The header text.
        text: String,
    },
    /// Image header.
    Image {
        /// The image reference.
        image: MediaReference,
    },
    /// Video header.
    Video {
        /// The video reference.
        video: MediaReference,
    },
    /// Document header.
    Document {
        /// The document reference.
        document: DocumentReference,
    },
}

impl InteractiveHeader {
    /// Creates a text header.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates an image header from a public URL.
    #[must_use]
    pub fn image_link(link: impl Into<String>) -> Self {
        Self::Image {
            image: MediaReference::link(link),
        }
    }

    /// Creates a video header from a public URL.
    #[must_use]
    pub fn video_link(link: impl Into<String>) -> Self {
        Self::Video {
            video: MediaReference::link(link),
        }
    }

    /// Creates a document header from a public URL.
    #[must_use]
    pub fn document_link(link: impl Into<String>, filename: Option<String>) -> Self {
        Self::Document {
            document: DocumentReference {
                id: None,
                link: Some(link.into()),
                provider: None,
                filename,
            },
        }
    }
}

/// Media referenced by uploaded id or public link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaReference {
    /// Media id of previously uploaded media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Public URL of the media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Hosting provider for partner-hosted media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<MediaProvider>,
}

impl MediaReference {
    /// References media by uploaded id.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// References media by public URL.
    #[must_use]
    pub fn link(link: impl Into<String>) -> Self {
        Self {
            link: Some(link.into()),
            ..Self::default()
        }
    }
}

/// Document referenced by uploaded id or public link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentReference {
    /// Media id of a previously uploaded document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Public URL of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Hosting provider for partner-hosted media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<MediaProvider>,
    /// File name shown to the recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Partner hosting the media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaProvider {
    /// Provider name as registered with the platform.
    pub name: String,
}

/// A block holding plain text, used for bodies and footers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// The text.
    pub text: String,
}

impl TextBlock {
    /// Creates a text block.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The action of an interactive message.
///
/// Serialised without a tag; the shape alone identifies the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InteractiveAction {
    /// Sectioned list behind a single button.
    List(ListAction),
    /// Reply buttons.
    Button(ButtonAction),
    /// Location request marker.
    LocationRequest(LocationRequestAction),
}

impl InteractiveAction {
    /// Returns the sub-kind this action belongs to.
    #[must_use]
    pub const fn kind(&self) -> InteractiveType {
        match self {
            Self::List(_) => InteractiveType::List,
            Self::Button(_) => InteractiveType::Button,
            Self::LocationRequest(_) => InteractiveType::LocationRequest,
        }
    }
}

/// Action of a list message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAction {
    /// Label of the button that opens the list.
    pub button: String,
    /// Sections of the list.
    pub sections: Vec<ListSection>,
}

/// One titled group of rows in a list message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSection {
    /// Section title.
    pub title: String,
    /// Selectable rows.
    pub rows: Vec<ListRow>,
}

impl ListSection {
    /// Creates a section.
    #[must_use]
    pub fn new(title: impl Into<String>, rows: Vec<ListRow>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

/// A selectable row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRow {
    /// Id posted back when the row is selected.
    pub id: String,
    /// Row title.
    pub title: String,
    /// Optional row description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ListRow {
    /// Creates a row without a description.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Sets the row description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Action of a reply-button message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonAction {
    /// The reply buttons, one to three.
    pub buttons: Vec<ReplyButton>,
}

/// A reply button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyButton {
    /// The only button type the endpoint accepts.
    Reply {
        /// Id and title of the button.
        reply: ButtonReply,
    },
}

impl ReplyButton {
    /// Creates a reply button.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::Reply {
            reply: ButtonReply {
                id: id.into(),
                title: title.into(),
            },
        }
    }

    /// Returns the id and title of the button.
    #[must_use]
    pub const fn reply(&self) -> &ButtonReply {
        match self {
            Self::Reply { reply } => reply,
        }
    }
}

/// Id and title of a reply button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonReply {
    /// Id posted back when the button is tapped.
    pub id: String,
    /// Button title.
    pub title: String,
}

/// Action of a location-request message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationRequestAction {
    /// Fixed marker.
    pub name: LocationRequestName,
}

/// The fixed action name of a location request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationRequestName {
    /// `send_location`
    #[default]
    SendLocation,
}
