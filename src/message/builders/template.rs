//! Builder for template messages.

use super::MessageBuilder;
use crate::message::{
    domain::{
        ButtonSubType, ComponentParameter, Message, MessagePayload, ParameterKind,
        TemplateComponent, TemplateLanguage, TemplatePayload,
    },
    error::ValidationError,
};

const HEADER_PARAMETERS: &[ParameterKind] = &[
    ParameterKind::Text,
    ParameterKind::Image,
    ParameterKind::Document,
    ParameterKind::Video,
];
const BODY_PARAMETERS: &[ParameterKind] = &[
    ParameterKind::Text,
    ParameterKind::Currency,
    ParameterKind::DateTime,
];
const BUTTON_PARAMETERS: &[ParameterKind] = &[ParameterKind::Payload, ParameterKind::Text];

/// Builds a template message.
///
/// Components are kept in the order they are added. The provider expects
/// header, body, footer and then buttons; the builder does not reorder.
///
/// # Examples
///
/// ```
/// use metakit_whatsapp::message::builders::{MessageBuilder, TemplateMessageBuilder};
/// use metakit_whatsapp::message::domain::{ButtonSubType, ComponentParameter};
/// use metakit_whatsapp::message::error::ValidationError;
///
/// fn order_update() -> Result<(), ValidationError> {
///     let mut builder = TemplateMessageBuilder::new();
///     builder
///         .set_recipient("5511999999999")
///         .set_template("order_update", "pt_BR")
///         .add_body(vec![ComponentParameter::text("#1234")])?
///         .add_button(0, ButtonSubType::QuickReply, vec![ComponentParameter::payload("track")])?;
///     let message = builder.build()?;
///     assert_eq!(message.recipient(), "5511999999999");
///     Ok(())
/// }
/// # order_update().expect("valid template");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateMessageBuilder {
    to: String,
    name: String,
    language_code: String,
    components: Vec<TemplateComponent>,
    has_header: bool,
    has_body: bool,
    has_footer: bool,
    button_count: usize,
}

impl TemplateMessageBuilder {
    /// Maximum number of button components in one template.
    pub const MAX_BUTTONS: usize = 10;

    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the template and its language.
    pub fn set_template(
        &mut self,
        name: impl Into<String>,
        language_code: impl Into<String>,
    ) -> &mut Self {
        self.name = name.into();
        self.language_code = language_code.into();
        self
    }

    /// Appends the header component.
    ///
    /// # Errors
    ///
    /// Fails if a header was already added, if more than one parameter is
    /// given, or if the parameter is not text, image, document or video.
    pub fn add_header(
        &mut self,
        parameters: Vec<ComponentParameter>,
    ) -> Result<&mut Self, ValidationError> {
        if self.has_header {
            return Err(ValidationError::DuplicateComponent("header"));
        }
        if parameters.len() > 1 {
            return Err(ValidationError::TooManyHeaderParameters);
        }
        ensure_parameter_kinds("header", &parameters, HEADER_PARAMETERS)?;

        self.components.push(TemplateComponent::Header { parameters });
        self.has_header = true;
        Ok(self)
    }

    /// Appends the body component.
    ///
    /// # Errors
    ///
    /// Fails if a body was already added or if any parameter is not text,
    /// currency or `date_time`.
    pub fn add_body(
        &mut self,
        parameters: Vec<ComponentParameter>,
    ) -> Result<&mut Self, ValidationError> {
        if self.has_body {
            return Err(ValidationError::DuplicateComponent("body"));
        }
        ensure_parameter_kinds("body", &parameters, BODY_PARAMETERS)?;

        self.components.push(TemplateComponent::Body { parameters });
        self.has_body = true;
        Ok(self)
    }

    /// Appends the footer component.
    ///
    /// # Errors
    ///
    /// Fails if a footer was already added.
    pub fn add_footer(&mut self, text: impl Into<String>) -> Result<&mut Self, ValidationError> {
        if self.has_footer {
            return Err(ValidationError::DuplicateComponent("footer"));
        }

        self.components
            .push(TemplateComponent::Footer { text: text.into() });
        self.has_footer = true;
        Ok(self)
    }

    /// Appends a button component for the button at zero-based `index`.
    ///
    /// # Errors
    ///
    /// Fails once [`Self::MAX_BUTTONS`] buttons were added or if any
    /// parameter is not payload or text.
    pub fn add_button(
        &mut self,
        index: u32,
        sub_type: ButtonSubType,
        parameters: Vec<ComponentParameter>,
    ) -> Result<&mut Self, ValidationError> {
        if self.button_count >= Self::MAX_BUTTONS {
            return Err(ValidationError::TooManyTemplateButtons {
                max: Self::MAX_BUTTONS,
            });
        }
        ensure_parameter_kinds("button", &parameters, BUTTON_PARAMETERS)?;

        self.components.push(TemplateComponent::Button {
            sub_type,
            index: index.to_string(),
            parameters,
        });
        self.button_count += 1;
        Ok(self)
    }
}

impl MessageBuilder for TemplateMessageBuilder {
    fn set_recipient(&mut self, to: impl Into<String>) -> &mut Self {
        self.to = to.into();
        self
    }

    fn build(&self) -> Result<Message, ValidationError> {
        if self.to.is_empty() || self.name.is_empty() || self.language_code.is_empty() {
            return Err(ValidationError::MissingTemplateFields);
        }

        Ok(Message::new(
            self.to.clone(),
            MessagePayload::Template {
                template: TemplatePayload {
                    name: self.name.clone(),
                    language: TemplateLanguage {
                        code: self.language_code.clone(),
                    },
                    components: self.components.clone(),
                },
            },
        ))
    }
}

fn ensure_parameter_kinds(
    component: &'static str,
    parameters: &[ComponentParameter],
    allowed: &[ParameterKind],
) -> Result<(), ValidationError> {
    match parameters
        .iter()
        .map(ComponentParameter::kind)
        .find(|kind| !allowed.contains(kind))
    {
        Some(kind) => Err(ValidationError::InvalidParameterType { component, kind }),
        None => Ok(()),
    }
}
