//! Failure arm of the register and login flows

use jobboard_http::ClientError;
use serde_json::Value;

pub(crate) const REGISTRATION_FAILED: &str = "Registration failed";
pub(crate) const LOGIN_FAILED: &str = "Login failed";

/// Why a register or login attempt failed.
///
/// `payload` is what the server said (field errors, `detail` messages) or a
/// generic message when there was no usable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.payload))]
pub struct AuthFailure {
    pub payload: Value,
}

impl AuthFailure {
    /// Failure carrying only a generic message
    pub fn generic(message: &str) -> Self {
        Self {
            payload: Value::String(message.to_string()),
        }
    }

    /// Failure carrying the server payload of `error`, or `fallback`
    pub fn from_client(error: &ClientError, fallback: &str) -> Self {
        error
            .payload()
            .map_or_else(|| Self::generic(fallback), |payload| Self { payload })
    }

    /// Payload text when the payload is a bare string
    pub fn message(&self) -> Option<&str> {
        self.payload.as_str()
    }
}

fn describe(payload: &Value) -> String {
    match payload {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(AuthFailure::generic(LOGIN_FAILED).to_string(), "Login failed");
        let failure = AuthFailure {
            payload: json!({"detail": "bad"}),
        };
        assert_eq!(failure.to_string(), r#"{"detail":"bad"}"#);
        assert_eq!(failure.message(), None);
    }

    #[test]
    fn test_from_client_uses_fallback_without_payload() {
        let err = ClientError::Configuration("base_url is required".into());
        assert_eq!(
            AuthFailure::from_client(&err, REGISTRATION_FAILED),
            AuthFailure::generic(REGISTRATION_FAILED)
        );
    }
}
