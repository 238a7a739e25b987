//! Builder for interactive messages.

use super::{MessageBuilder, ensure_max_chars};
use crate::message::{
    domain::{
        ButtonAction, InteractiveAction, InteractiveHeader, InteractivePayload, InteractiveType,
        ListAction, ListSection, LocationRequestAction, Message, MessagePayload, ReplyButton,
        TextBlock,
    },
    error::ValidationError,
};

const MAX_HEADER_TEXT: usize = 60;
const MAX_BODY_TEXT: usize = 1024;
const MAX_LIST_BUTTON_TEXT: usize = 20;
const MAX_SECTIONS: usize = 10;
const MAX_SECTION_TITLE: usize = 24;
const MAX_ROW_TITLE: usize = 24;
const MAX_ROW_DESCRIPTION: usize = 72;
const MAX_REPLY_BUTTONS: usize = 3;
const MAX_REPLY_TITLE: usize = 20;

/// Builds list, reply-button and location-request messages.
///
/// The sub-kind defaults to [`InteractiveType::List`]. Each
/// `create_*_action` call checks that the current sub-kind matches before
/// storing the action, so select the sub-kind first. `build` rejects an
/// action left over from a different sub-kind.
///
/// # Examples
///
/// ```
/// use metakit_whatsapp::message::builders::{InteractiveMessageBuilder, MessageBuilder};
/// use metakit_whatsapp::message::domain::{ListRow, ListSection};
/// use metakit_whatsapp::message::error::ValidationError;
///
/// fn menu() -> Result<(), ValidationError> {
///     let mut builder = InteractiveMessageBuilder::new();
///     builder
///         .set_recipient("5511999999999")
///         .set_body("Please select an option:")?
///         .create_list_action(
///             "View options",
///             vec![ListSection::new(
///                 "Section 1",
///                 vec![ListRow::new("option1", "Option 1").with_description("First")],
///             )],
///         )?;
///     let message = builder.build()?;
///     assert_eq!(message.recipient(), "5511999999999");
///     Ok(())
/// }
/// # menu().expect("valid list message");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InteractiveMessageBuilder {
    to: String,
    kind: InteractiveType,
    header: Option<InteractiveHeader>,
    body: Option<TextBlock>,
    footer: Option<TextBlock>,
    action: Option<InteractiveAction>,
}

impl InteractiveMessageBuilder {
    /// Creates an empty list-type builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header.
    ///
    /// # Errors
    ///
    /// Fails if a text header exceeds 60 characters. Media headers are
    /// accepted as given.
    pub fn set_header(&mut self, header: InteractiveHeader) -> Result<&mut Self, ValidationError> {
        if let InteractiveHeader::Text { text } = &header {
            ensure_max_chars("Header text", text, MAX_HEADER_TEXT)?;
        }
        self.header = Some(header);
        Ok(self)
    }

    /// Sets the body text.
    ///
    /// # Errors
    ///
    /// Fails if the text exceeds 1024 characters.
    pub fn set_body(&mut self, text: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let body = TextBlock::new(text);
        ensure_max_chars("Body text", &body.text, MAX_BODY_TEXT)?;
        self.body = Some(body);
        Ok(self)
    }

    /// Sets the footer text.
    pub fn set_footer(&mut self, text: impl Into<String>) -> &mut Self {
        self.footer = Some(TextBlock::new(text));
        self
    }

    /// Switches to a list message.
    pub const fn set_list_type(&mut self) -> &mut Self {
        self.kind = InteractiveType::List;
        self
    }

    /// Switches to a reply-button message.
    pub const fn set_button_type(&mut self) -> &mut Self {
        self.kind = InteractiveType::Button;
        self
    }

    /// Switches to a location-request message.
    pub const fn set_location_request_type(&mut self) -> &mut Self {
        self.kind = InteractiveType::LocationRequest;
        self
    }

    /// Returns the current sub-kind.
    #[must_use]
    pub const fn kind(&self) -> InteractiveType {
        self.kind
    }

    /// Stores a list action.
    ///
    /// Checks run in order and stop at the first violation: the button
    /// label, the section count, then each section's title and rows, then
    /// each row's title and description.
    ///
    /// # Errors
    ///
    /// Fails unless the builder is a list message, or when any list limit
    /// is exceeded.
    pub fn create_list_action(
        &mut self,
        button: impl Into<String>,
        sections: Vec<ListSection>,
    ) -> Result<&mut Self, ValidationError> {
        if self.kind != InteractiveType::List {
            return Err(ValidationError::ActionTypeMismatch { action: "list" });
        }

        let label: String = button.into();
        ensure_max_chars("Button text", &label, MAX_LIST_BUTTON_TEXT)?;

        if sections.len() > MAX_SECTIONS {
            return Err(ValidationError::TooManySections { max: MAX_SECTIONS });
        }
        if sections.is_empty() {
            return Err(ValidationError::NoSections);
        }

        for section in &sections {
            validate_section(section)?;
        }

        self.action = Some(InteractiveAction::List(ListAction {
            button: label,
            sections,
        }));
        Ok(self)
    }

    /// Stores a reply-button action.
    ///
    /// # Errors
    ///
    /// Fails unless the builder is a button message, when there are no
    /// buttons or more than three, when a title exceeds 20 characters, or
    /// when an id has leading or trailing whitespace.
    pub fn create_button_action(
        &mut self,
        buttons: Vec<ReplyButton>,
    ) -> Result<&mut Self, ValidationError> {
        if self.kind != InteractiveType::Button {
            return Err(ValidationError::ActionTypeMismatch { action: "button" });
        }
        if buttons.is_empty() {
            return Err(ValidationError::NoButtons);
        }
        if buttons.len() > MAX_REPLY_BUTTONS {
            return Err(ValidationError::TooManyButtons {
                max: MAX_REPLY_BUTTONS,
            });
        }

        for button in &buttons {
            let reply = button.reply();
            ensure_max_chars("Button title", &reply.title, MAX_REPLY_TITLE)?;
            if reply.id.trim() != reply.id {
                return Err(ValidationError::UntrimmedButtonId(reply.id.clone()));
            }
        }

        self.action = Some(InteractiveAction::Button(ButtonAction { buttons }));
        Ok(self)
    }

    /// Stores the location-request action.
    ///
    /// # Errors
    ///
    /// Fails unless the builder is a location-request message.
    pub fn create_location_request_action(&mut self) -> Result<&mut Self, ValidationError> {
        if self.kind != InteractiveType::LocationRequest {
            return Err(ValidationError::ActionTypeMismatch {
                action: "location request",
            });
        }

        self.action = Some(InteractiveAction::LocationRequest(
            LocationRequestAction::default(),
        ));
        Ok(self)
    }
}

impl MessageBuilder for InteractiveMessageBuilder {
    fn set_recipient(&mut self, to: impl Into<String>) -> &mut Self {
        self.to = to.into();
        self
    }

    fn build(&self) -> Result<Message, ValidationError> {
        if self.to.is_empty() {
            return Err(ValidationError::MissingRecipient);
        }
        let body = self.body.clone().ok_or(ValidationError::MissingBody)?;
        let action = self.action.clone().ok_or(ValidationError::MissingAction)?;
        if action.kind() != self.kind {
            return Err(ValidationError::ActionKindMismatch {
                kind: self.kind,
                action: action.kind(),
            });
        }

        Ok(Message::new(
            self.to.clone(),
            MessagePayload::Interactive {
                interactive: InteractivePayload {
                    kind: self.kind,
                    header: self.header.clone(),
                    body,
                    footer: self.footer.clone(),
                    action,
                },
            },
        ))
    }
}

fn validate_section(section: &ListSection) -> Result<(), ValidationError> {
    ensure_max_chars("Section title", &section.title, MAX_SECTION_TITLE)?;
    if section.rows.is_empty() {
        return Err(ValidationError::EmptySection);
    }

    for row in &section.rows {
        ensure_max_chars("Row title", &row.title, MAX_ROW_TITLE)?;
        if let Some(description) = &row.description {
            ensure_max_chars("Row description", description, MAX_ROW_DESCRIPTION)?;
        }
    }
    Ok(())
}
