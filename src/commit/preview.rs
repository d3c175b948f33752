// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message preview.

use console::{style, Term};

use crate::config::Config;

use super::render::{render, Decoration};
use super::state::CommitState;

/// Commit preview renderer.
pub struct CommitPreview<'a> {
    state: &'a CommitState,
    config: &'a Config,
}

impl<'a> CommitPreview<'a> {
    /// Create a new preview for a commit in progress.
    pub fn new(state: &'a CommitState, config: &'a Config) -> Self {
        Self { state, config }
    }

    /// Print the preview note to stderr.
    pub fn print(&self) {
        let term = Term::stderr();
        let _ = self.write_to(&term);
    }

    fn write_to(&self, term: &Term) -> std::io::Result<()> {
        term.write_line(&format!(
            "{}{}",
            style("┌─ ").dim(),
            style("Commit Preview").bold()
        ))?;

        for line in self.decorated().lines() {
            term.write_line(&format!("{} {}", style("│").dim(), line))?;
        }

        term.write_line(&style("└─").dim().to_string())?;

        Ok(())
    }

    /// The decorated message shown inside the note.
    pub fn decorated(&self) -> String {
        render(self.state, self.config, Decoration::Colored)
    }

    /// The plain message that would be committed.
    pub fn plain(&self) -> String {
        render(self.state, self.config, Decoration::Plain)
    }
}
