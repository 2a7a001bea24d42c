use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email is required")]
    MissingEmail,

    #[error("user type is required")]
    MissingUserType,

    #[error("{0}")]
    UnknownUserType(String),

    #[error("confidentiality terms must be accepted")]
    MissingConsent,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Email delivery failed: {0}")]
    Notification(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(ValidationError::MissingConsent) => ErrorCode::MissingConsent,
            AppError::InvalidInput(_) => ErrorCode::MissingField,
            AppError::Database(_) => ErrorCode::StorageError,
            AppError::Notification(_) => ErrorCode::NotificationError,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

/// Failure reason reported to the boundary layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    MissingField,
    MissingConsent,
    StorageError,
    NotificationError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::MissingConsent => "MISSING_CONSENT",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::NotificationError => "NOTIFICATION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
