use serde::{Deserialize, Serialize};
use validator::Validate;
use chrono::NaiveDateTime;

/// Profile of a registered user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub role: String,
    /// Naive ISO-8601 timestamp as stored by the API
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserProfile {
    /// `created_at` rendered as e.g. "Mar 04, 2025"; `None` when absent or unparsable.
    pub fn member_since(&self) -> Option<String> {
        let raw = self.created_at.as_deref().filter(|s| !s.is_empty())?;
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|dt| dt.format("%b %d, %Y").to_string())
    }
}

/// Partial profile update; omitted fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

impl UpdateProfileRequest {
    /// Keeps only the fields that differ from `current`.
    pub fn changes_from(current: &UserProfile, full_name: &str, email: &str) -> Self {
        let full_name = full_name.trim();
        let email = email.trim();
        Self {
            full_name: (full_name != current.full_name).then(|| full_name.to_string()),
            email: (email != current.email).then(|| email.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: "65a1".into(),
            username: "puppey".into(),
            email: "puppey@example.com".into(),
            full_name: "Clement Ivanov".into(),
            role: "user".into(),
            created_at: Some("2025-03-04T10:15:30.123456".into()),
        }
    }

    #[test]
    fn formats_member_since() {
        assert_eq!(profile().member_since().as_deref(), Some("Mar 04, 2025"));
    }

    #[test]
    fn member_since_ignores_garbage() {
        let p = UserProfile { created_at: Some("yesterday".into()), ..profile() };
        assert_eq!(p.member_since(), None);
        let p = UserProfile { created_at: Some(String::new()), ..profile() };
        assert_eq!(p.member_since(), None);
    }

    #[test]
    fn update_only_carries_changed_fields() {
        let update = UpdateProfileRequest::changes_from(&profile(), "Clement Ivanov", " new@example.com ");
        assert_eq!(update.full_name, None);
        assert_eq!(update.email.as_deref(), Some("new@example.com"));
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"email":"new@example.com"}"#);
    }

    #[test]
    fn unchanged_update_is_empty() {
        let update = UpdateProfileRequest::changes_from(&profile(), "Clement Ivanov", "puppey@example.com");
        assert!(update.is_empty());
    }

    #[test]
    fn update_validates_email() {
        let update = UpdateProfileRequest { email: Some("nope".into()), ..Default::default() };
        assert!(update.validate().is_err());
    }
}
