use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl SharedError {
    /// Builds the error for a non-OK response from its status and `detail`.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        let detail = detail.unwrap_or_else(|| format!("HTTP {}", status));
        match status {
            401 => Self::Unauthorized(detail),
            404 => Self::NotFound(detail),
            400 | 422 => Self::Validation(detail),
            _ => Self::Api { status, detail },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Message meant for an alert panel, without the variant prefix.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized(msg)
            | Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::Network(msg)
            | Self::Conversion(msg) => msg.clone(),
            Self::Api { detail, .. } => detail.clone(),
            Self::MissingField(field) => format!("{} is required", field),
        }
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid {}", field),
                })
            })
            .collect();
        messages.sort();
        if messages.is_empty() {
            Self::Validation(errors.to_string())
        } else {
            Self::Validation(messages.join("; "))
        }
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
