use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for user login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request for user registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3 to 50 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// The user embedded in a successful login response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub user_id: String,
    pub username: String,
    pub role: String,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Response for successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[serde(default)]
    pub expires_in: u64,
    pub user: SessionUser,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Response for successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    pub user_id: String,
    pub email: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SharedError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn valid_registration() -> RegisterRequest {
        RegisterRequest {
            username: "miracle".to_string(),
            email: "miracle@example.com".to_string(),
            full_name: "Amer Al-Barkawi".to_string(),
            password: "supersecret".to_string(),
        }
    }

    #[test]
    fn accepts_valid_registration() {
        assert!(valid_registration().validate().is_ok());
    }

    #[rstest]
    #[case::short_username(RegisterRequest { username: "ab".into(), ..valid_registration() }, "Username must be 3 to 50 characters")]
    #[case::bad_email(RegisterRequest { email: "not-an-email".into(), ..valid_registration() }, "Invalid email format")]
    #[case::short_password(RegisterRequest { password: "short".into(), ..valid_registration() }, "Password must be at least 8 characters")]
    #[case::no_name(RegisterRequest { full_name: String::new(), ..valid_registration() }, "Full name is required")]
    fn rejects_invalid_registration(#[case] request: RegisterRequest, #[case] message: &str) {
        let err: SharedError = request.validate().unwrap_err().into();
        assert_eq!(err, SharedError::Validation(message.to_string()));
    }

    #[test]
    fn empty_login_is_rejected() {
        let request = LoginRequest { username: String::new(), password: "x".into() };
        assert!(request.validate().is_err());
    }

    #[test]
    fn parses_login_response() {
        let body = r#"{
            "code": 200,
            "message": "Login successful",
            "access_token": "abc.def.ghi",
            "token_type": "Bearer",
            "expires_in": 3600,
            "user": { "user_id": "65a1", "username": "miracle", "role": "user" }
        }"#;
        let response: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.access_token, "abc.def.ghi");
        assert_eq!(response.expires_in, 3600);
        assert_eq!(response.user.username, "miracle");
        assert!(!response.user.is_admin());
    }

    #[rstest]
    #[case("admin", true)]
    #[case("user", false)]
    #[case("Admin", false)]
    fn admin_flag_follows_role(#[case] role: &str, #[case] expected: bool) {
        let user = SessionUser {
            user_id: "65a1".into(),
            username: "miracle".into(),
            role: role.into(),
        };
        assert_eq!(user.is_admin(), expected);
    }
}
