use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::Engine;
use serde_json::{json, Value};

use gmail_send::message::{encode_web_safe, EmailMessage};
use gmail_send::output::{render, Displayable};

#[test]
fn test_encoded_message_has_no_padding_and_round_trips() {
    let original = "To: x\r\n\n body\n";

    let encoded = encode_web_safe(original.as_bytes());
    assert!(!encoded.contains('='));

    let decoded = URL_SAFE_NO_PAD.decode(&encoded).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), original);
}

#[test]
fn test_composed_message_survives_transport_encoding() {
    let email = EmailMessage::build(
        "sender@gmail.com",
        Some("Sender Name"),
        "recipient@gmail.com",
        "Hello",
        "<p>Hi there</p>",
    );

    let encoded = email.encoded();
    assert!(!encoded.contains('='));

    let decoded = String::from_utf8(URL_SAFE_NO_PAD.decode(&encoded).unwrap()).unwrap();
    assert_eq!(decoded, email.to_wire_format());
    assert!(decoded.contains("From: sender@gmail.com\r\n"));
    assert!(decoded.contains("To: recipient@gmail.com\r\n"));
    assert!(decoded.contains("Subject: Hello\r\n"));
    assert!(decoded.ends_with("\n<p>Hi there</p>\n"));
}

#[test]
fn test_successful_send_outcome_prints_json_then_blank_error() {
    // Shape of the two printed lines after a structured success result.
    let result = Displayable::Record(json!({"id": "18c0ffee", "threadId": "18c0ffee"}));
    let error = Displayable::None;

    let result_line = render(&result);
    let error_line = render(&error);

    assert!(!result_line.is_empty());
    let parsed: Value = serde_json::from_str(&result_line).unwrap();
    assert_eq!(parsed["id"], "18c0ffee");
    assert_eq!(error_line, "");
}

#[test]
fn test_error_only_outcome_prints_blank_result_then_json() {
    let result = Displayable::None;
    let error = Displayable::Record(json!({
        "error": {"code": 403, "message": "insufficient scope"}
    }));

    assert_eq!(render(&result), "");
    let error_line = render(&error);
    assert!(!error_line.is_empty());
    let parsed: Value = serde_json::from_str(&error_line).unwrap();
    assert_eq!(parsed["error"]["code"], 403);
}

#[test]
fn test_empty_success_body_normalizes_to_empty_object() {
    // A success whose body did not parse still prints a present-but-empty
    // record, never the null literal.
    assert_eq!(render(&Displayable::Record(Value::Null)), "{}");
}
