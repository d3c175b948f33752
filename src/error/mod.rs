// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the comet application.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for comet operations.
#[derive(Error, Debug)]
pub enum CometError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("The commit has not been created")]
    Cancelled,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for CometError {
    fn from(err: dialoguer::Error) -> Self {
        CometError::Ui(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration:\n{}", .violations.join("\n"))]
    Invalid { violations: Vec<String> },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("No changes added to commit (use \"git add\" and/or select files to stage)")]
    NoStagedChanges,

    #[error("Failed to read status: {message}")]
    StatusFailed { message: String },

    #[error("Failed to create commit: {message}")]
    CommitFailed { message: String },

    #[error("Failed to get branch: {message}")]
    BranchFailed { message: String },

    #[error("Failed to push: {message}")]
    PushFailed { message: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Detached HEAD state")]
    DetachedHead,
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias for comet operations.
pub type Result<T> = std::result::Result<T, CometError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/.cometrc"),
        };
        assert!(err.to_string().contains("/path/to/.cometrc"));
    }

    #[test]
    fn test_invalid_config_lists_all_violations() {
        let err = ConfigError::Invalid {
            violations: vec![
                "commit_type.initial_value: 'nope' is not in the catalogue".to_string(),
                "commit_title.max_size: must be positive".to_string(),
            ],
        };
        let text = err.to_string();
        assert!(text.contains("commit_type.initial_value"));
        assert!(text.contains("commit_title.max_size"));
    }

    #[test]
    fn test_git_error_display() {
        let err = GitError::CommandFailed {
            command: "push".to_string(),
            message: "remote rejected".to_string(),
        };
        assert!(err.to_string().contains("push"));
        assert!(err.to_string().contains("remote rejected"));
    }

    #[test]
    fn test_comet_error_from_config_error() {
        let config_err = ConfigError::ParseError {
            message: "bad json".to_string(),
        };
        let err: CometError = config_err.into();
        assert!(err.to_string().contains("bad json"));
    }
}
