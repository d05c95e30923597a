//! Admin API error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every flow reports failures through [`ApiError::user_message`], which
//! prefers the server-supplied `message` and otherwise falls back to the
//! error's own display text. Toasts therefore never show a raw debug dump.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by admin API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No session token is stored, so a protected call cannot be made.
    #[error("no session token stored")]
    MissingToken,

    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A success response body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The server answered 2xx but flagged the operation as unsuccessful.
    #[error("request rejected by server")]
    Rejected(Option<String>),
}

impl ApiError {
    /// Server-supplied message, if the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected(message) => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            _ => None,
        }
    }

    /// Text shown to the user in an error toast.
    pub fn user_message(&self) -> String {
        self.server_message().map_or_else(|| self.to_string(), str::to_owned)
    }
}

/// Turn a status + body pair into a typed result.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx statuses (with any `message`
/// extracted from the body) and [`ApiError::Decode`] when a 2xx body does not
/// deserialize into `T`.
pub fn decode_response<T: serde::de::DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, message: extract_message(body) });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull `message` out of an error body. Arrays of messages are joined.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(serde_json::Value::as_str).collect();
            if parts.is_empty() { None } else { Some(parts.join(", ")) }
        }
        _ => None,
    }
}
