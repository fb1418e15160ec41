//! Error handling for the Krishi Mitra client data layer
//!
//! Provides consistent error details in Nepali and English so UI code can
//! translate a failure into screen state without matching on variants.

use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    #[error("Invalid token")]
    InvalidToken,

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_ne: String,
    },

    // Store errors
    #[error("Action {0} carries a non-serializable payload")]
    NonSerializableAction(String),

    #[error("Unknown slice: {0}")]
    UnknownSlice(String),

    #[error("Invalid payload for {action}: {message}")]
    InvalidPayload { action: String, message: String },

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Bilingual description of an error for display
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_ne: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// Stable code and user-facing messages for this error
    pub fn detail(&self) -> ErrorDetail {
        let (code, message_en, message_ne, field) = match self {
            AppError::UserNotFound => (
                "USER_NOT_FOUND",
                "User not found".to_string(),
                "प्रयोगकर्ता फेला परेन".to_string(),
                Some("email".to_string()),
            ),
            AppError::InvalidPassword => (
                "INVALID_PASSWORD",
                "Invalid password".to_string(),
                "पासवर्ड मिलेन".to_string(),
                Some("password".to_string()),
            ),
            AppError::UserAlreadyExists(email) => (
                "USER_ALREADY_EXISTS",
                format!("An account with {} already exists", email),
                format!("{} इमेलको खाता पहिले नै छ", email),
                Some("email".to_string()),
            ),
            AppError::InvalidToken => (
                "INVALID_TOKEN",
                "Session is invalid, please log in again".to_string(),
                "सत्र अमान्य छ, कृपया फेरि लगइन गर्नुहोस्".to_string(),
                None,
            ),
            AppError::Validation {
                field,
                message,
                message_ne,
            } => (
                "VALIDATION_ERROR",
                message.clone(),
                message_ne.clone(),
                Some(field.clone()),
            ),
            AppError::NonSerializableAction(action) => (
                "NON_SERIALIZABLE_ACTION",
                format!("Action {} carries a non-serializable payload", action),
                format!("{} कार्यको डाटा सुरक्षित गर्न मिल्दैन", action),
                None,
            ),
            AppError::UnknownSlice(name) => (
                "UNKNOWN_SLICE",
                format!("Unknown state slice: {}", name),
                format!("अज्ञात स्टेट भाग: {}", name),
                None,
            ),
            AppError::InvalidPayload { action, message } => (
                "INVALID_PAYLOAD",
                format!("Invalid data for {}: {}", action, message),
                format!("{} को डाटा अमान्य छ", action),
                None,
            ),
            AppError::Storage(msg) => (
                "STORAGE_ERROR",
                format!("Storage error: {}", msg),
                "भण्डारणमा समस्या आयो".to_string(),
                None,
            ),
            AppError::Serialization(_) => (
                "SERIALIZATION_ERROR",
                "Saved data could not be read".to_string(),
                "सुरक्षित डाटा पढ्न सकिएन".to_string(),
                None,
            ),
            AppError::Io(_) => (
                "IO_ERROR",
                "A device storage error occurred".to_string(),
                "उपकरणको भण्डारणमा समस्या आयो".to_string(),
                None,
            ),
            AppError::Configuration(msg) => (
                "CONFIGURATION_ERROR",
                format!("Configuration error: {}", msg),
                "सेटिङमा समस्या छ".to_string(),
                None,
            ),
        };

        ErrorDetail {
            code: code.to_string(),
            message_en,
            message_ne,
            field,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let (field, message) = errors
            .field_errors()
            .into_iter()
            .next()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field));
                (field.to_string(), message)
            })
            .unwrap_or_else(|| ("input".to_string(), "Invalid input".to_string()));

        AppError::Validation {
            message_ne: format!("{} मान्य छैन", field),
            field,
            message,
        }
    }
}

/// Result type alias for services
pub type AppResult<T> = Result<T, AppError>;
