// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Comet - Interactive Conventional Commit Assistant
//!
//! A CLI tool that turns a sequence of answers into a single, well-formed
//! conventional commit message, driven by a user-editable configuration.
//!
//! # Features
//!
//! - **Interactive Commit Builder**: Guided commit creation with live preview
//! - **Branch Inference**: Ticket and commit type seeded from the branch name
//! - **Configurable Catalogues**: Types, scopes and footers from `.cometrc`
//! - **Breaking & Deprecation Footers**: Conventional footer blocks
//! - **Push Flow**: Optional confirmed push after committing
//!
//! # Example
//!
//! ```
//! use comet::branch;
//! use comet::commit::{render, CommitState, Decoration};
//! use comet::config::Config;
//!
//! let config = Config::default();
//!
//! let mut state = CommitState::default();
//! state.commit_type = "feat".to_string();
//! state.ticket = branch::infer_ticket("feature/JIRA-99").unwrap_or_default();
//! state.title = "add login".to_string();
//!
//! let message = render(&state, &config, Decoration::Plain);
//! assert_eq!(message, "feat: JIRA-99 add login");
//! ```

// Module declarations
pub mod branch;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;

// Re-exports for convenience
pub use config::Config;
pub use error::{CometError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of comet.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
