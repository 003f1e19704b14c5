use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid volume: {volume_ml} ml (allowed 1..={max_ml})")]
    InvalidVolume { volume_ml: i64, max_ml: i64 },

    #[error("invalid hydration score: {score} (allowed 0.0..=1.0)")]
    InvalidHydrationScore { score: f64 },

    #[error("invalid daily goal: {goal_ml} ml")]
    InvalidGoal { goal_ml: i64 },

    #[error("validation failed: {message}")]
    Validation {
        message: String,
        details: Option<JsonValue>,
    },

    #[error("not authenticated")]
    NotAuthenticated,

    #[error("record not found")]
    NotFound,

    #[error("store error: {message}")]
    Store { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Stable code consumed by the presentation layer when surfacing errors.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidVolume { .. } => "INVALID_VOLUME",
            AppError::InvalidHydrationScore { .. } => "INVALID_HYDRATION_SCORE",
            AppError::InvalidGoal { .. } => "INVALID_GOAL",
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::NotAuthenticated => "NOT_AUTHENTICATED",
            AppError::NotFound => "NOT_FOUND",
            AppError::Store { .. } => "STORE_FAILURE",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Other(_) => "UNKNOWN",
        }
    }

    pub fn invalid_volume(volume_ml: i64, max_ml: i64) -> Self {
        warn!(target: "app::validation", volume_ml, max_ml, "rejected drink volume");
        AppError::InvalidVolume { volume_ml, max_ml }
    }

    pub fn invalid_hydration_score(score: f64) -> Self {
        warn!(target: "app::validation", score, "rejected hydration score");
        AppError::InvalidHydrationScore { score }
    }

    pub fn invalid_goal(goal_ml: i64) -> Self {
        warn!(target: "app::validation", goal_ml, "rejected daily goal");
        AppError::InvalidGoal { goal_ml }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, "validation error");
        AppError::Validation {
            message,
            details: None,
        }
    }

    pub fn validation_with_details(message: impl Into<String>, details: JsonValue) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, details = %details, "validation error with details");
        AppError::Validation {
            message,
            details: Some(details),
        }
    }

    pub fn not_authenticated() -> Self {
        warn!(target: "app::session", "call without an authenticated session");
        AppError::NotAuthenticated
    }

    pub fn not_found() -> Self {
        warn!(target: "app::db", "record not found");
        AppError::NotFound
    }

    pub fn store(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::db", %message, "store error");
        AppError::Store { message }
    }

    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::other", %message, "unexpected error");
        AppError::Other(message)
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(error: rusqlite::Error) -> Self {
        use rusqlite::Error::{QueryReturnedNoRows, SqliteFailure};
        use rusqlite::ErrorCode;

        match &error {
            QueryReturnedNoRows => AppError::not_found(),
            SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation => {
                AppError::store("constraint violation")
            }
            _ => {
                error!(target: "app::db", error = ?error, "sqlite error");
                AppError::store(error.to_string())
            }
        }
    }
}
