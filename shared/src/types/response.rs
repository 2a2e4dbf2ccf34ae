//! API response envelope types.
//!
//! The public API speaks a deliberately small wire format: every error body
//! and most success bodies carry a human-readable `message` field, optionally
//! alongside endpoint-specific data serialized by the route's own DTO.

use serde::{Deserialize, Serialize};

/// Minimal `{ "message": ... }` body used by error responses and
/// acknowledgement-only success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_body_serialization() {
        let body = MessageBody::new("OTP sent successfully");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"OTP sent successfully"}"#);
    }
}
