//! Error types and exit codes for mazegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid maze, unknown vertex, rejected edge, etc.)

mod macros;

use std::fmt::Debug;

use thiserror::Error;

/// Exit codes for the mazegraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid maze or graph operation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Why an edge insertion was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRejection {
    /// The source vertex is not in the graph
    MissingSource,
    /// The destination vertex is not in the graph
    MissingDestination,
    /// The weight was below zero
    NegativeWeight(i64),
}

impl std::fmt::Display for EdgeRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeRejection::MissingSource => write!(f, "source vertex is not in the graph"),
            EdgeRejection::MissingDestination => {
                write!(f, "destination vertex is not in the graph")
            }
            EdgeRejection::NegativeWeight(w) => write!(f, "weight {} is negative", w),
        }
    }
}

/// Errors that can occur during mazegraph operations
#[derive(Error, Debug)]
pub enum MazeGraphError {
    // Graph contract violations (exit code 3)
    #[error("vertex already in graph: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: EdgeRejection,
    },

    #[error("vertex not in graph: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl MazeGraphError {
    /// Create an error for a vertex that is already present
    pub fn duplicate_vertex(vertex: &impl Debug) -> Self {
        MazeGraphError::DuplicateVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a rejected edge insertion
    pub fn invalid_edge(from: &impl Debug, to: &impl Debug, reason: EdgeRejection) -> Self {
        MazeGraphError::InvalidEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            reason,
        }
    }

    /// Create an error for a vertex that is not in the graph
    pub fn unknown_vertex(vertex: &impl Debug) -> Self {
        MazeGraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MazeGraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MazeGraphError::UnknownFormat(_) | MazeGraphError::UsageError(_) => ExitCode::Usage,

            MazeGraphError::DuplicateVertex { .. }
            | MazeGraphError::InvalidEdge { .. }
            | MazeGraphError::UnknownVertex { .. }
            | MazeGraphError::InvalidValue { .. } => ExitCode::Data,

            MazeGraphError::Io(_)
            | MazeGraphError::Json(_)
            | MazeGraphError::Toml(_)
            | MazeGraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MazeGraphError::DuplicateVertex { .. } => "duplicate_vertex",
            MazeGraphError::InvalidEdge { .. } => "invalid_edge",
            MazeGraphError::UnknownVertex { .. } => "unknown_vertex",
            MazeGraphError::InvalidValue { .. } => "invalid_value",
            MazeGraphError::UnknownFormat(_) => "unknown_format",
            MazeGraphError::UsageError(_) => "usage_error",
            MazeGraphError::Io(_) => "io_error",
            MazeGraphError::Json(_) => "json_error",
            MazeGraphError::Toml(_) => "toml_error",
            MazeGraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for mazegraph operations
pub type Result<T> = std::result::Result<T, MazeGraphError>;
