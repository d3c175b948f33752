// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from .cometrc.
//! Field names and nesting follow the on-disk JSON format, so existing
//! configuration files keep parsing across versions.

use serde::{Deserialize, Serialize};

use super::default;

/// The main configuration structure for comet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clear the terminal when a run starts.
    pub clean_console: bool,

    /// Show the staging step before preparing the commit.
    pub check_status: bool,

    /// Commit type configuration.
    pub commit_type: CommitTypeConfig,

    /// Commit scope configuration.
    pub commit_scope: CommitScopeConfig,

    /// Ticket / issue configuration.
    pub check_ticket: CheckTicketConfig,

    /// Commit title configuration.
    pub commit_title: CommitTitleConfig,

    /// Commit body configuration.
    pub commit_body: CommitBodyConfig,

    /// Commit footer configuration.
    pub commit_footer: CommitFooterConfig,

    /// Breaking change configuration.
    pub breaking_change: BreakingChangeConfig,

    /// Ask for confirmation before creating the commit.
    pub confirm_commit: bool,

    /// Print the commit summary after the commit is created.
    pub print_commit_output: bool,

    /// Push configuration.
    pub push: PushConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clean_console: false,
            check_status: true,
            commit_type: CommitTypeConfig::default(),
            commit_scope: CommitScopeConfig::default(),
            check_ticket: CheckTicketConfig::default(),
            commit_title: CommitTitleConfig::default(),
            commit_body: CommitBodyConfig::default(),
            commit_footer: CommitFooterConfig::default(),
            breaking_change: BreakingChangeConfig::default(),
            confirm_commit: true,
            print_commit_output: true,
            push: PushConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Commit type configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitTypeConfig {
    /// Whether the type step is enabled.
    pub enable: bool,

    /// Preselected type value.
    pub initial_value: String,

    /// Seed the type selection from the current branch name.
    pub infer_type_from_branch: bool,

    /// Prefix the stored type with the catalogue emoji.
    pub emojis: bool,

    /// The type catalogue, in display order.
    pub options: Vec<TypeOption>,
}

impl Default for CommitTypeConfig {
    fn default() -> Self {
        Self {
            enable: true,
            initial_value: "feat".to_string(),
            infer_type_from_branch: true,
            emojis: true,
            options: default::default_type_options(),
        }
    }
}

/// A commit type catalogue entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TypeOption {
    /// The value written into the commit message.
    pub value: String,

    /// Label shown in the selection prompt.
    pub label: String,

    /// Short description shown next to the label.
    pub hint: String,

    /// Emoji prefix used when emojis are enabled.
    pub emoji: String,
}

/// Commit scope configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitScopeConfig {
    /// Whether the scope step is enabled.
    pub enable: bool,

    /// Allow a free-text scope via the `custom` catalogue entry.
    pub custom_scope: bool,

    /// Preselected scope value.
    pub initial_value: String,

    /// The scope catalogue, in display order.
    pub options: Vec<ScopeOption>,
}

impl Default for CommitScopeConfig {
    fn default() -> Self {
        Self {
            enable: false,
            custom_scope: true,
            initial_value: String::new(),
            options: default::default_scope_options(),
        }
    }
}

/// A commit scope catalogue entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScopeOption {
    /// The value written into the commit message.
    pub value: String,

    /// Label shown in the selection prompt.
    pub label: String,
}

/// Ticket / issue configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckTicketConfig {
    /// Infer the ticket from the current branch name.
    pub infer_ticket: bool,

    /// Let the user confirm or edit the inferred ticket.
    pub confirm_ticket: bool,

    /// Prefix the ticket with `#`.
    pub append_hashtag: bool,

    /// Include the ticket in the commit title.
    pub add_to_title: bool,

    /// Where the ticket goes inside the title.
    pub title_position: TitlePosition,
}

impl Default for CheckTicketConfig {
    fn default() -> Self {
        Self {
            infer_ticket: true,
            confirm_ticket: true,
            append_hashtag: false,
            add_to_title: true,
            title_position: TitlePosition::Start,
        }
    }
}

/// Position of the ticket inside the commit title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitlePosition {
    Start,
    End,
}

impl Default for TitlePosition {
    fn default() -> Self {
        TitlePosition::Start
    }
}

/// Commit title configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitTitleConfig {
    /// Maximum length of the full title line, including type, scope and
    /// ticket.
    pub max_size: usize,
}

impl Default for CommitTitleConfig {
    fn default() -> Self {
        Self { max_size: 70 }
    }
}

/// Commit body configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitBodyConfig {
    /// Whether the body step is enabled.
    pub enable: bool,

    /// Whether the body must be non-empty.
    pub required: bool,
}

impl Default for CommitBodyConfig {
    fn default() -> Self {
        Self {
            enable: true,
            required: false,
        }
    }
}

/// Commit footer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CommitFooterConfig {
    /// Whether the footer step is enabled.
    ///
    /// The step always runs for breaking commits.
    pub enable: bool,

    /// Footers preselected in the multi-select prompt.
    pub initial_value: Vec<FooterKind>,
}

/// The fixed set of footer kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FooterKind {
    Closes,
    BreakingChange,
    Deprecated,
    Custom,
}

impl FooterKind {
    /// Get the string representation of the footer kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FooterKind::Closes => "closes",
            FooterKind::BreakingChange => "breaking-change",
            FooterKind::Deprecated => "deprecated",
            FooterKind::Custom => "custom",
        }
    }

    /// Get all footer kinds, in catalogue order.
    pub fn all() -> &'static [FooterKind] {
        &[
            FooterKind::Closes,
            FooterKind::BreakingChange,
            FooterKind::Deprecated,
            FooterKind::Custom,
        ]
    }
}

impl std::fmt::Display for FooterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Breaking change configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakingChangeConfig {
    /// Add a `!` to the commit title when the commit is breaking.
    pub add_exclamation_to_title: bool,
}

impl Default for BreakingChangeConfig {
    fn default() -> Self {
        Self {
            add_exclamation_to_title: true,
        }
    }
}

/// Push configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    /// Offer to push after the commit is created.
    pub enable: bool,

    /// Ask for confirmation before pushing.
    pub confirm: bool,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            enable: true,
            confirm: true,
        }
    }
}
