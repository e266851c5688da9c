use reqwest::StatusCode;
use serde_json::Value;

use crate::output::Displayable;

const SEND_ENDPOINT_BASE: &str = "https://gmail.googleapis.com/gmail/v1";

/// Submit an encoded message under the given user identity. The outcome is
/// returned as a (result, error) pair of display values rather than an Err:
/// a failed send is data to print, not a reason to abort.
pub async fn send_message(
    client: &reqwest::Client,
    token: &str,
    user_id: &str,
    raw: &str,
) -> (Displayable, Displayable) {
    send_message_at(SEND_ENDPOINT_BASE, client, token, user_id, raw).await
}

async fn send_message_at(
    base_url: &str,
    client: &reqwest::Client,
    token: &str,
    user_id: &str,
    raw: &str,
) -> (Displayable, Displayable) {
    let send_url = format!("{}/users/{}/messages/send", base_url, user_id);

    let request_body = serde_json::json!({
        "raw": raw
    });

    let response = match client
        .post(&send_url)
        .bearer_auth(token)
        .json(&request_body)
        .send()
        .await
    {
        Ok(response) => response,
        // No response at all: surface the transport failure as a scalar.
        Err(e) => return (Displayable::None, Displayable::scalar(e.to_string())),
    };

    if response.status().is_success() {
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        (Displayable::Record(body), Displayable::None)
    } else {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        (Displayable::None, error_record(status, &text))
    }
}

// API error bodies are JSON objects and pass through as-is; anything else
// (proxy HTML, truncated responses) keeps the status code and raw body
fn error_record(status: StatusCode, body: &str) -> Displayable {
    match serde_json::from_str::<Value>(body) {
        Ok(v) if v.is_object() => Displayable::Record(v),
        _ => Displayable::record(serde_json::json!({
            "code": status.as_u16(),
            "body": body,
        })),
    }
}
