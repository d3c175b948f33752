// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Semantic configuration validation.
//!
//! Shape errors are caught by serde during parsing; this pass checks the
//! cross-field rules and reports every violation at once instead of
//! stopping at the first.

use crate::error::ConfigError;

use super::schema::Config;

/// Validate a parsed configuration.
///
/// Returns `ConfigError::Invalid` carrying one message per violation.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let mut violations = Vec::new();

    check_type_catalogue(config, &mut violations);
    check_scope_catalogue(config, &mut violations);
    check_footer_selection(config, &mut violations);

    if config.commit_title.max_size == 0 {
        violations.push("commit_title.max_size: must be positive".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Invalid { violations })
    }
}

fn check_type_catalogue(config: &Config, violations: &mut Vec<String>) {
    let options = &config.commit_type.options;

    if options.is_empty() {
        violations.push("commit_type.options: catalogue must not be empty".to_string());
        return;
    }

    for (i, option) in options.iter().enumerate() {
        if options[..i].iter().any(|o| o.value == option.value) {
            violations.push(format!(
                "commit_type.options: duplicate value '{}'",
                option.value
            ));
        }
    }

    let initial = &config.commit_type.initial_value;
    if !options.iter().any(|o| &o.value == initial) {
        violations.push(format!(
            "commit_type.initial_value: '{}' is not in the catalogue",
            initial
        ));
    }
}

fn check_scope_catalogue(config: &Config, violations: &mut Vec<String>) {
    let options = &config.commit_scope.options;

    for (i, option) in options.iter().enumerate() {
        if options[..i].iter().any(|o| o.value == option.value) {
            violations.push(format!(
                "commit_scope.options: duplicate value '{}'",
                option.value
            ));
        }
    }

    // An empty initial value means "no preselection" and is always allowed.
    let initial = &config.commit_scope.initial_value;
    if !initial.is_empty() && !options.iter().any(|o| &o.value == initial) {
        violations.push(format!(
            "commit_scope.initial_value: '{}' is not in the catalogue",
            initial
        ));
    }
}

fn check_footer_selection(config: &Config, violations: &mut Vec<String>) {
    let selection = &config.commit_footer.initial_value;

    for (i, kind) in selection.iter().enumerate() {
        if selection[..i].contains(kind) {
            violations.push(format!(
                "commit_footer.initial_value: '{}' selected more than once",
                kind
            ));
        }
    }
}
