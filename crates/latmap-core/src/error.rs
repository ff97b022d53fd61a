//! Error types and exit codes for latmap
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph/trace input, unknown node)

use thiserror::Error;

/// Exit codes for the latmap CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during latmap operations
#[derive(Error, Debug)]
pub enum LatmapError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("malformed connection {item:?} (expected <from><to><weight>, e.g. AB5)")]
    MalformedConnection { item: String },

    #[error("invalid weight {token:?} in connection {item:?}")]
    InvalidWeight { item: String, token: String },

    #[error("negative weight in connection {item:?}")]
    NegativeWeight { item: String },

    #[error("duplicate connection {from} -> {to}")]
    DuplicateConnection { from: String, to: String },

    #[error("connection from {0} back to itself")]
    SelfLoop(String),

    #[error("malformed trace {trace:?}: {reason}")]
    MalformedTrace { trace: String, reason: String },

    #[error("unknown node: {0}")]
    UnknownNode(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl LatmapError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LatmapError::UnknownFormat(_) | LatmapError::UsageError(_) => ExitCode::Usage,

            LatmapError::MalformedConnection { .. }
            | LatmapError::InvalidWeight { .. }
            | LatmapError::NegativeWeight { .. }
            | LatmapError::DuplicateConnection { .. }
            | LatmapError::SelfLoop(_)
            | LatmapError::MalformedTrace { .. }
            | LatmapError::UnknownNode(_) => ExitCode::Data,

            LatmapError::Io(_) | LatmapError::Json(_) | LatmapError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            LatmapError::UnknownFormat(_) => "unknown_format",
            LatmapError::UsageError(_) => "usage_error",
            LatmapError::MalformedConnection { .. } => "malformed_connection",
            LatmapError::InvalidWeight { .. } => "invalid_weight",
            LatmapError::NegativeWeight { .. } => "negative_weight",
            LatmapError::DuplicateConnection { .. } => "duplicate_connection",
            LatmapError::SelfLoop(_) => "self_loop",
            LatmapError::MalformedTrace { .. } => "malformed_trace",
            LatmapError::UnknownNode(_) => "unknown_node",
            LatmapError::Io(_) => "io_error",
            LatmapError::Json(_) => "json_error",
            LatmapError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for latmap operations
pub type Result<T> = std::result::Result<T, LatmapError>;
