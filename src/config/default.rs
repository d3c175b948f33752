// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values and catalogues.

use super::schema::{Config, ScopeOption, TypeOption};

/// Commit types that may introduce breaking changes.
pub const BREAKING_TYPES: &[&str] = &["feat", "fix", "hotfix"];

/// Catalogue value that opens the free-text scope input.
pub const CUSTOM_SCOPE_KEY: &str = "custom";

/// Get the default configuration.
pub fn default_config() -> Config {
    Config::default()
}

fn type_option(value: &str, hint: &str, emoji: &str) -> TypeOption {
    TypeOption {
        value: value.to_string(),
        label: value.to_string(),
        hint: hint.to_string(),
        emoji: emoji.to_string(),
    }
}

/// The default commit type catalogue.
pub fn default_type_options() -> Vec<TypeOption> {
    vec![
        type_option("feat", "A new feature", "🆕"),
        type_option("fix", "A bug fix", "🐛"),
        type_option(
            "refactor",
            "A code change that neither fixes a bug nor adds a feature",
            "♻️",
        ),
        type_option("perf", "A code change that improves performance", "⚡"),
        type_option("docs", "Documentation only changes", "📝"),
        type_option(
            "style",
            "Changes that do not affect the meaning of the code",
            "💅",
        ),
        type_option(
            "test",
            "Adding missing tests or correcting existing tests",
            "✅",
        ),
        type_option("int", "Changes that affect internationalization", "🌍"),
        type_option(
            "build",
            "Changes that affect the build system or external dependencies",
            "🏗️",
        ),
        type_option("ci", "Changes to our CI configuration files and scripts", "🔧"),
        type_option("clean", "Removing unnecessary code or files", "🧹"),
        type_option("hotfix", "Critical hotfix", "🚑"),
        type_option("initial", "Initial commit", "🎉"),
    ]
}

/// The default commit scope catalogue.
pub fn default_scope_options() -> Vec<ScopeOption> {
    [
        ("app", "app"),
        ("shared", "shared"),
        ("server", "server"),
        ("tools", "tools"),
        ("", "none"),
    ]
    .iter()
    .map(|(value, label)| ScopeOption {
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect()
}

/// Labels and hints for the footer multi-select, in catalogue order.
pub fn footer_prompt_options() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "closes <issue/ticket>",
            "Attempts to infer ticket from branch",
        ),
        ("breaking change", "Add breaking change"),
        ("deprecated", "Add deprecated change"),
        ("custom", "Add a custom footer"),
    ]
}

/// Generate the configuration file written by `comet init`.
pub fn example_config() -> String {
    let config = default_config();
    let mut rendered =
        serde_json::to_string_pretty(&config).expect("default config serializes");
    rendered.push('\n');
    rendered
}
