use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Unknown weapon '{id}'")]
    UnknownWeapon { id: String },

    #[error("Tuning parse error: {0}")]
    Tuning(#[source] serde_json::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tuning value for '{field}': {reason}")]
    InvalidTuning { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SimError>;
