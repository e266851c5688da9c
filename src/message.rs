use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::Engine;
use std::collections::HashMap;

/// An outbound message: header fields plus an HTML body. Header iteration
/// order is unspecified; the receiving API reparses the full blob.
pub struct EmailMessage {
    headers: HashMap<String, String>,
    body: String,
}

impl EmailMessage {
    /// Build a message with the standard header set for a single HTML email.
    /// The Sender header is only emitted when a display name is given.
    pub fn build(
        from: &str,
        sender_name: Option<&str>,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Self {
        let mut headers = HashMap::new();
        headers.insert("From".to_string(), from.to_string());
        headers.insert("To".to_string(), to.to_string());
        if let Some(name) = sender_name {
            headers.insert("Sender".to_string(), format!("{} <{}>", name, from));
        }
        headers.insert(
            "Content-Type".to_string(),
            "text/html; charset=\"utf-8\"".to_string(),
        );
        headers.insert("Subject".to_string(), subject.to_string());

        Self {
            headers,
            body: body.to_string(),
        }
    }

    /// Render the message as headers (`Name: Value` + CRLF each), a blank
    /// line, then the body.
    pub fn to_wire_format(&self) -> String {
        let mut msg = String::new();
        for (name, value) in &self.headers {
            msg.push_str(&format!("{}: {}\r\n", name, value));
        }
        msg.push_str(&format!("\n{}\n", self.body));
        msg
    }

    /// Wire format, base64url-encoded without padding.
    pub fn encoded(&self) -> String {
        encode_web_safe(self.to_wire_format().as_bytes())
    }
}

/// Base64url without trailing `=` padding, as the send endpoint requires.
pub fn encode_web_safe(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
