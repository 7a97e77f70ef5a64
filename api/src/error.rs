//! Errors produced by the wallet history request.

use thiserror::Error;

/// Shown when the backend does not provide a message of its own.
pub const FALLBACK_MESSAGE: &str = "An error happened while fetching";

/// A failed wallet history request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },

    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// A 2xx response whose body is not a history array.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The text to show the user for this failure.
    ///
    /// Only the backend's own message is surfaced; everything else collapses
    /// to [`FALLBACK_MESSAGE`].
    pub fn notification_text(&self) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Builds a [`ApiError::Server`] from a status code and the raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Server {
            status,
            message: server_message(body),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Extracts a user-facing message from an error response body.
///
/// Accepts a bare JSON string, a JSON object carrying a `message`, `detail`
/// or `error` string, or plain text. Blank bodies yield `None`.
pub fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(s)) => Some(s).filter(|s| !s.trim().is_empty()),
        Ok(serde_json::Value::Object(map)) => ["message", "detail", "error"]
            .iter()
            .find_map(|key| map.get(*key)?.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .or_else(|| Some(body.to_string())),
        Ok(serde_json::Value::Null) => None,
        _ => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = ApiError::from_response(400, "Invalid address");
        assert_eq!(err.notification_text(), "Invalid address");
    }

    #[test]
    fn json_string_body_is_unwrapped() {
        let err = ApiError::from_response(400, "\"Invalid address\"");
        assert_eq!(err.notification_text(), "Invalid address");
    }

    #[test]
    fn json_object_message_field_is_used() {
        assert_eq!(
            server_message(r#"{"detail": "Unsupported network"}"#).as_deref(),
            Some("Unsupported network")
        );
        assert_eq!(
            server_message(r#"{"message": "rate limited", "code": 429}"#).as_deref(),
            Some("rate limited")
        );
    }

    #[test]
    fn empty_body_falls_back() {
        let err = ApiError::from_response(500, "");
        assert_eq!(err, ApiError::Server { status: 500, message: None });
        assert_eq!(err.notification_text(), FALLBACK_MESSAGE);

        assert_eq!(server_message("   \n"), None);
        assert_eq!(server_message("null"), None);
    }

    #[test]
    fn transport_and_decode_errors_fall_back() {
        assert_eq!(
            ApiError::Transport("connection refused".into()).notification_text(),
            FALLBACK_MESSAGE
        );
        assert_eq!(
            ApiError::Decode("expected a sequence".into()).notification_text(),
            FALLBACK_MESSAGE
        );
    }
}
