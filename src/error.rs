use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("no capacity selected: {0}")]
    CapacityUnset(String),

    #[error("capacity reached: limit is {limit}")]
    CapacityReached { limit: usize },

    #[error("a check is already in flight")]
    CheckInFlight,

    #[error("check cancelled")]
    Cancelled,

    #[error("generation service unavailable")]
    Service,
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        tracing::error!(error = ?error, "generation request failed");
        Self::Service
    }
}
