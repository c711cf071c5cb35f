//! Session domain model and authentication payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// The authenticated identity and bearer credential.
///
/// Created on successful login (the `/login` response body carries exactly
/// these fields) and persisted by the session store. There is at most one
/// live session per client process; an HTTP 401 from any call destroys it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    /// Display name. The backend's wire field is `nombre`.
    pub nombre: String,
    pub email: String,
    pub token: String,
}

/// Request payload for `POST /login`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request payload for `POST /register`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub nombre: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_session_roundtrip() {
        let session = Session {
            user_id: "u-1".to_string(),
            nombre: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            token: "tok".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_session_deserializes_login_response() {
        // The /login response body maps directly onto Session.
        let json = r#"{"token":"abc","email":"ana@example.com","nombre":"Ana","user_id":"u-1"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.user_id, "u-1");
        assert_eq!(session.token, "abc");
    }

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let empty_password = LoginRequest {
            email: "ana@example.com".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            nombre: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let missing_name = RegisterRequest {
            nombre: String::new(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(missing_name.validate().is_err());
    }
}
