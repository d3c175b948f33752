// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for comet.
//!
//! This module handles locating, parsing, and validating the `.cometrc`
//! JSON configuration, with defaults for every absent field.

pub mod default;
mod loader;
mod schema;
mod validate;

pub use default::{default_config, BREAKING_TYPES, CUSTOM_SCOPE_KEY};
pub use loader::{find_config_file, load_config, parse_config, CONFIG_FILE_NAME};
pub use schema::*;
pub use validate::validate;
