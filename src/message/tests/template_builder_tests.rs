//! Unit tests for `TemplateMessageBuilder`.

use crate::message::{
    builders::{MessageBuilder, TemplateMessageBuilder},
    domain::{ButtonSubType, ComponentParameter, ParameterKind},
    error::ValidationError,
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn builder() -> TemplateMessageBuilder {
    let mut builder = TemplateMessageBuilder::new();
    builder
        .set_recipient("5511999999999")
        .set_template("hello_world", "en_US");
    builder
}

#[rstest]
fn builds_template_without_components(builder: TemplateMessageBuilder) {
    let message = builder.build().expect("valid message");

    assert_eq!(
        serde_json::to_value(&message).expect("serialise"),
        json!({
            "messaging_product": "whatsapp",
            "recipient_type": "individual",
            "to": "5511999999999",
            "type": "template",
            "template": {
                "name": "hello_world",
                "language": { "code": "en_US" },
                "components": []
            }
        })
    );
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn components_keep_insertion_order(mut builder: TemplateMessageBuilder) -> eyre::Result<()> {
    builder
        .add_button(0, ButtonSubType::QuickReply, vec![ComponentParameter::payload("p0")])?
        .add_footer("Thanks")?
        .add_body(vec![
            ComponentParameter::text("Maria"),
            ComponentParameter::currency("$10.00", "USD", 10_000),
            ComponentParameter::date_time("May 1"),
        ])?
        .add_header(vec![ComponentParameter::image("https://example.com/h.png")])?;

    let value = serde_json::to_value(builder.build()?)?;
    assert_eq!(
        value["template"]["components"],
        json!([
            {
                "type": "button",
                "sub_type": "quick_reply",
                "index": "0",
                "parameters": [{ "type": "payload", "payload": "p0" }]
            },
            { "type": "footer", "text": "Thanks" },
            {
                "type": "body",
                "parameters": [
                    { "type": "text", "text": "Maria" },
                    {
                        "type": "currency",
                        "currency": { "fallback_value": "$10.00", "code": "USD", "amount_1000": 10000 }
                    },
                    { "type": "date_time", "date_time": { "fallback_value": "May 1" } }
                ]
            },
            {
                "type": "header",
                "parameters": [{ "type": "image", "image": { "link": "https://example.com/h.png" } }]
            }
        ])
    );
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn second_header_is_rejected_after_other_components(
    mut builder: TemplateMessageBuilder,
) -> eyre::Result<()> {
    builder.add_header(vec![ComponentParameter::text("Hi")])?;
    builder.add_body(vec![])?;

    let result = builder.add_header(vec![]);
    assert_eq!(
        result.map(|_| ()),
        Err(ValidationError::DuplicateComponent("header"))
    );
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn second_body_and_footer_are_rejected(mut builder: TemplateMessageBuilder) -> eyre::Result<()> {
    builder.add_body(vec![ComponentParameter::text("one")])?;
    builder.add_footer("footer")?;

    let body = builder.add_body(vec![]).map(|_| ());
    let footer = builder.add_footer("again").map(|_| ());

    assert_eq!(body, Err(ValidationError::DuplicateComponent("body")));
    assert_eq!(footer, Err(ValidationError::DuplicateComponent("footer")));
    assert_eq!(
        ValidationError::DuplicateComponent("footer").to_string(),
        "Template can only have one footer component"
    );
    Ok(())
}

#[rstest]
fn header_accepts_at_most_one_parameter(mut builder: TemplateMessageBuilder) {
    let result = builder
        .add_header(vec![
            ComponentParameter::text("a"),
            ComponentParameter::text("b"),
        ])
        .map(|_| ());

    assert_eq!(result, Err(ValidationError::TooManyHeaderParameters));
}

#[rstest]
#[case(ComponentParameter::text("t"))]
#[case(ComponentParameter::image("https://example.com/i.png"))]
#[case(ComponentParameter::document("https://example.com/d.pdf", Some("d.pdf".to_owned())))]
#[case(ComponentParameter::video("https://example.com/v.mp4"))]
fn header_accepts_media_and_text(
    mut builder: TemplateMessageBuilder,
    #[case] parameter: ComponentParameter,
) {
    assert!(builder.add_header(vec![parameter]).is_ok());
}

#[rstest]
#[case(ComponentParameter::payload("p"), ParameterKind::Payload)]
#[case(ComponentParameter::currency("$1", "USD", 1000), ParameterKind::Currency)]
fn header_rejects_other_parameter_types(
    mut builder: TemplateMessageBuilder,
    #[case] parameter: ComponentParameter,
    #[case] kind: ParameterKind,
) {
    let error = builder
        .add_header(vec![parameter])
        .map(|_| ())
        .expect_err("parameter type should be rejected");

    assert_eq!(
        error,
        ValidationError::InvalidParameterType {
            component: "header",
            kind
        }
    );
    assert!(error.to_string().contains(kind.as_str()));
}

#[rstest]
fn body_rejects_media_parameters(mut builder: TemplateMessageBuilder) {
    let error = builder
        .add_body(vec![
            ComponentParameter::text("ok"),
            ComponentParameter::video("https://example.com/v.mp4"),
        ])
        .map(|_| ())
        .expect_err("video should be rejected");

    assert_eq!(error.to_string(), "Invalid parameter type for body: video");
}

#[rstest]
fn button_rejects_non_payload_parameters(mut builder: TemplateMessageBuilder) {
    let error = builder
        .add_button(0, ButtonSubType::Url, vec![ComponentParameter::date_time("x")])
        .map(|_| ())
        .expect_err("date_time should be rejected");

    assert_eq!(
        error.to_string(),
        "Invalid parameter type for button: date_time"
    );
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn eleventh_button_is_rejected(mut builder: TemplateMessageBuilder) -> eyre::Result<()> {
    for index in 0..10 {
        builder.add_button(
            index,
            ButtonSubType::QuickReply,
            vec![ComponentParameter::payload(format!("p{index}"))],
        )?;
    }

    let error = builder
        .add_button(10, ButtonSubType::QuickReply, vec![])
        .map(|_| ())
        .expect_err("eleventh button should fail");

    assert_eq!(error, ValidationError::TooManyTemplateButtons { max: 10 });
    assert!(error.to_string().contains("10"));
    Ok(())
}

#[rstest]
#[case("", "hello_world", "en_US")]
#[case("5511999999999", "", "en_US")]
#[case("5511999999999", "hello_world", "")]
fn missing_fields_are_rejected(#[case] to: &str, #[case] name: &str, #[case] language: &str) {
    let result = TemplateMessageBuilder::new()
        .set_recipient(to)
        .set_template(name, language)
        .build();

    assert_eq!(result, Err(ValidationError::MissingTemplateFields));
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn named_text_parameter_serialises_name(mut builder: TemplateMessageBuilder) -> eyre::Result<()> {
    builder.add_body(vec![ComponentParameter::named_text("customer", "Maria")])?;

    let value = serde_json::to_value(builder.build()?)?;
    assert_eq!(
        value["template"]["components"][0]["parameters"][0],
        json!({ "type": "text", "text": "Maria", "parameter_name": "customer" })
    );
    Ok(())
}
