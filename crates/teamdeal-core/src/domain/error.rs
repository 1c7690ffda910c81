//! Error taxonomy for teamdeal.
//!
//! Only input handling can fail. Dealing itself is infallible: an empty
//! stack is the normal end-of-deal signal, not an error.

/// teamdeal errors.
#[derive(Debug, thiserror::Error)]
pub enum TeamDealError {
    #[error("invalid {field}: {input:?} is not a valid number: {source}")]
    InvalidNumber {
        field: &'static str,
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Number of roles cannot be negative or zero. (got {0})")]
    InvalidRoleCount(i64),

    #[error("input ended while waiting for {prompt}")]
    UnexpectedEof { prompt: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for teamdeal operations.
pub type Result<T> = std::result::Result<T, TeamDealError>;
