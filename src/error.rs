//! Error types for trail
//!
//! Path errors are caller precondition violations. They are returned
//! immediately and never retried; the owning traversal decides whether a
//! failure aborts the branch or is a defect to surface upward.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path and configuration operations
#[derive(Error, Debug)]
pub enum PathError {
    // Path precondition violations
    #[error("step with label '{label}' does not exist")]
    LabelNotFound { label: String },

    #[error("index {index} out of range for path of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("cannot add label '{label}' to an empty path")]
    EmptyPath { label: String },

    // Configuration failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to write config {path:?}: {reason}")]
    ConfigWrite { path: PathBuf, reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },
}

impl PathError {
    /// Create an error for a missing label
    pub fn label_not_found(label: &str) -> Self {
        PathError::LabelNotFound {
            label: label.to_string(),
        }
    }

    /// Create an error for an index past the end of the path
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        PathError::IndexOutOfRange { index, size }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// True for errors caused by misusing a path rather than by the environment
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            PathError::LabelNotFound { .. }
                | PathError::IndexOutOfRange { .. }
                | PathError::EmptyPath { .. }
        )
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathError::LabelNotFound { .. } => "label_not_found",
            PathError::IndexOutOfRange { .. } => "index_out_of_range",
            PathError::EmptyPath { .. } => "empty_path",
            PathError::Io(_) => "io_error",
            PathError::Toml(_) => "toml_error",
            PathError::ConfigWrite { .. } => "config_write",
            PathError::InvalidValue { .. } => "invalid_value",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            PathError::LabelNotFound { label } | PathError::EmptyPath { label } => {
                error_obj["label"] = serde_json::json!(label);
            }
            PathError::IndexOutOfRange { index, size } => {
                error_obj["index"] = serde_json::json!(index);
                error_obj["size"] = serde_json::json!(size);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for trail operations
pub type Result<T> = std::result::Result<T, PathError>;
