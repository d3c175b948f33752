// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! This module provides the repository operations comet needs: status,
//! staging, committing and pushing.

pub mod commands;
mod repo;

pub use commands::{create_commit, push, stage_files};
pub use repo::{get_branch_name, Repository};
