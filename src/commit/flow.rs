// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive commit flow.

use std::time::Duration;

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use indicatif::ProgressBar;

use crate::branch;
use crate::config::{Config, FooterKind, BREAKING_TYPES, CUSTOM_SCOPE_KEY};
use crate::error::{CometError, GitError, Result};
use crate::git::{self, Repository};

use super::preview::CommitPreview;
use super::render::{render, Decoration};
use super::state::CommitState;

/// The interactive session that populates a [`CommitState`] and hands the
/// rendered message to git.
pub struct CommitFlow {
    config: Config,
    state: CommitState,
    breaking: bool,
    type_prefill: Option<String>,
    scope_prefill: Option<String>,
    title_prefill: Option<String>,
    body_prefill: Option<String>,
    ticket_prefill: Option<String>,
}

impl CommitFlow {
    /// Create a new flow.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: CommitState::default(),
            breaking: false,
            type_prefill: None,
            scope_prefill: None,
            title_prefill: None,
            body_prefill: None,
            ticket_prefill: None,
        }
    }

    /// Pre-fill the commit type, skipping its prompt.
    pub fn with_type(mut self, value: &str) -> Result<Self> {
        if !self
            .config
            .commit_type
            .options
            .iter()
            .any(|o| o.value == value)
        {
            return Err(CometError::WithContext {
                context: "commit".to_string(),
                message: format!("Unknown commit type: {}", value),
            });
        }
        self.type_prefill = Some(value.to_string());
        Ok(self)
    }

    /// Pre-fill the scope, skipping its prompt.
    pub fn with_scope(mut self, scope: &str) -> Self {
        if !scope.is_empty() {
            self.scope_prefill = Some(scope.to_string());
        }
        self
    }

    /// Pre-fill the title, skipping its prompt.
    pub fn with_title(mut self, title: &str) -> Self {
        if !title.is_empty() {
            self.title_prefill = Some(title.to_string());
        }
        self
    }

    /// Pre-fill the body, skipping its prompt.
    pub fn with_body(mut self, body: &str) -> Self {
        if !body.is_empty() {
            self.body_prefill = Some(body.to_string());
        }
        self
    }

    /// Pre-fill the ticket, skipping inference and its prompt.
    pub fn with_ticket(mut self, ticket: &str) -> Self {
        if !ticket.is_empty() {
            self.ticket_prefill = Some(ticket.to_string());
        }
        self
    }

    /// Mark the commit as breaking up front.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// Run the interactive flow.
    pub fn run(mut self, dry_run: bool, skip_confirm: bool) -> Result<()> {
        let term = Term::stderr();
        let theme = ColorfulTheme::default();

        let repo = Repository::open_current()?;

        if self.config.clean_console {
            let _ = Term::stdout().clear_screen();
        }

        term.write_line(&format!(
            "{} {}",
            style(" comet ").black().on_cyan(),
            style("- Let's commit some changes to your cool project.").cyan()
        ))?;

        if self.config.check_status {
            self.step_status(&term, &theme, &repo)?;
        }

        if !repo.has_staged_changes()? {
            return Err(CometError::Git(GitError::NoStagedChanges));
        }

        step_banner(&term, " Preparing Commit ")?;

        if self.config.commit_type.enable {
            self.step_type(&theme, &repo)?;
        }

        if self.config.commit_scope.enable {
            self.step_scope(&theme)?;
        }

        if self.config.check_ticket.infer_ticket {
            self.step_ticket(&theme, &repo)?;
        }

        self.step_title(&theme)?;

        if self.config.commit_body.enable {
            self.step_body(&theme)?;
        }

        if self.config.commit_footer.enable || self.breaking {
            self.step_footers(&theme)?;
        }

        CommitPreview::new(&self.state, &self.config).print();

        if self.config.confirm_commit && !skip_confirm {
            let confirmed = Confirm::with_theme(&theme)
                .with_prompt("Confirm commit?")
                .default(true)
                .interact()?;

            if !confirmed {
                return Err(CometError::Cancelled);
            }
        }

        let message = render(&self.state, &self.config, Decoration::Plain)
            .trim()
            .to_string();

        if dry_run {
            term.write_line(&format!(
                "\n{} Would create commit:\n{}",
                style("[dry-run]").yellow(),
                message
            ))?;
            return Ok(());
        }

        let sha = git::create_commit(&repo, &message)?;
        tracing::debug!("Created commit {}", sha);

        if self.config.print_commit_output {
            let short_sha = &sha[..7.min(sha.len())];
            term.write_line(&format!(
                "\n{} {} {}",
                style("✓").green().bold(),
                style(format!("[{}]", short_sha)).cyan(),
                message.lines().next().unwrap_or("")
            ))?;
        }

        // The original flow never offers to push a breaking commit.
        if self.config.push.enable && !self.breaking {
            self.step_push(&term, &theme, &repo)?;
        }

        Ok(())
    }

    /// Show staged files and offer to stage the rest.
    fn step_status(&self, term: &Term, theme: &ColorfulTheme, repo: &Repository) -> Result<()> {
        step_banner(term, " Checking Git Status ")?;

        let changed = repo.changed_files()?;
        let staged = repo.staged_files()?;

        if !staged.is_empty() {
            let files = staged
                .iter()
                .map(|f| style(f).green().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            term.write_line(&format!("Changes to be committed:\n{}", files))?;
        }

        let unstaged: Vec<String> = changed
            .into_iter()
            .filter(|f| !staged.contains(f))
            .collect();

        if unstaged.is_empty() {
            return Ok(());
        }

        let mut items = vec!["Add all".to_string()];
        items.extend(unstaged.iter().cloned());

        let selection = MultiSelect::with_theme(theme)
            .with_prompt(
                "There are files that have not been staged. Select the ones you want to add",
            )
            .items(&items)
            .interact()?;

        let files: Vec<String> = if selection.contains(&0) {
            unstaged
        } else {
            selection.into_iter().map(|i| items[i].clone()).collect()
        };

        if !files.is_empty() {
            git::stage_files(repo, &files)?;
        }

        Ok(())
    }

    /// Select the commit type, seeded from the branch name when enabled.
    fn step_type(&mut self, theme: &ColorfulTheme, repo: &Repository) -> Result<()> {
        let options = self.config.commit_type.options.clone();
        let emojis = self.config.commit_type.emojis;

        if let Some(value) = self.type_prefill.take() {
            let emoji = options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.emoji.clone())
                .unwrap_or_default();
            self.state.commit_type = format_type(&value, &emoji, emojis);
            return Ok(());
        }

        let mut initial_value = self.config.commit_type.initial_value.clone();

        if self.config.commit_type.infer_type_from_branch {
            let candidates: Vec<String> = options.iter().map(|o| o.value.clone()).collect();
            if let Ok(branch_name) = repo.branch_name() {
                if let Some(inferred) = branch::infer_type(&branch_name, &candidates) {
                    initial_value = inferred;
                }
            }
        }

        let items: Vec<String> = options
            .iter()
            .map(|o| {
                let label = if emojis {
                    format!("{} {}", o.emoji, o.label)
                } else {
                    o.label.clone()
                };
                format!("{:14} {}", label, style(&o.hint).dim())
            })
            .collect();

        let default_idx = options
            .iter()
            .position(|o| o.value == initial_value)
            .unwrap_or(0);

        let selection = Select::with_theme(theme)
            .with_prompt("Select a commit type")
            .items(&items)
            .default(default_idx)
            .interact()?;

        let chosen = &options[selection];

        if BREAKING_TYPES.contains(&chosen.value.as_str()) && !self.breaking {
            self.breaking = Confirm::with_theme(theme)
                .with_prompt(
                    style("Does this commit have changes that break previous compatibility?")
                        .yellow()
                        .to_string(),
                )
                .default(false)
                .interact()?;
        }

        self.state.commit_type = format_type(&chosen.value, &chosen.emoji, emojis);

        Ok(())
    }

    /// Select the commit scope, with an optional free-text entry.
    fn step_scope(&mut self, theme: &ColorfulTheme) -> Result<()> {
        if let Some(scope) = self.scope_prefill.take() {
            self.state.scope = scope;
            return Ok(());
        }

        let options = &self.config.commit_scope.options;
        let items: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();

        let default_idx = options
            .iter()
            .position(|o| o.value == self.config.commit_scope.initial_value)
            .unwrap_or(0);

        let selection = Select::with_theme(theme)
            .with_prompt("Select a commit scope")
            .items(&items)
            .default(default_idx)
            .interact()?;

        let mut scope = options[selection].value.clone();

        if scope == CUSTOM_SCOPE_KEY && self.config.commit_scope.custom_scope {
            scope = Input::with_theme(theme)
                .with_prompt("Write a custom scope")
                .allow_empty(true)
                .interact_text()?;
        }

        self.state.scope = scope;

        Ok(())
    }

    /// Infer the ticket from the branch and let the user confirm or edit it.
    fn step_ticket(&mut self, theme: &ColorfulTheme, repo: &Repository) -> Result<()> {
        if let Some(ticket) = self.ticket_prefill.take() {
            self.state.ticket = ticket;
            return Ok(());
        }

        // A missing branch name is not an error; ticket entry simply
        // becomes manual.
        if let Ok(branch_name) = repo.branch_name() {
            if let Some(ticket) = branch::infer_ticket(&branch_name) {
                self.state.ticket = if self.config.check_ticket.append_hashtag {
                    format!("#{}", ticket)
                } else {
                    ticket
                };
            }
        }

        if self.config.check_ticket.confirm_ticket {
            let prompt = if self.state.ticket.is_empty() {
                format!("Add ticket / issue {}", style("(optional)").dim())
            } else {
                format!(
                    "Ticket / issue inferred from branch {}",
                    style("(confirm / edit)").dim()
                )
            };

            self.state.ticket = Input::with_theme(theme)
                .with_prompt(prompt)
                .with_initial_text(self.state.ticket.clone())
                .allow_empty(true)
                .interact_text()?;
        }

        Ok(())
    }

    /// Ask for the commit title, holding the full line to the length limit.
    fn step_title(&mut self, theme: &ColorfulTheme) -> Result<()> {
        if let Some(title) = self.title_prefill.take() {
            self.state.title = clean_title(&title);
            return Ok(());
        }

        let type_len = self.state.commit_type.chars().count();
        let scope_len = if self.state.scope.is_empty() {
            0
        } else {
            self.state.scope.chars().count() + 2
        };
        let ticket_len = if self.config.check_ticket.add_to_title {
            self.state.ticket.chars().count()
        } else {
            0
        };
        let max_size = self.config.commit_title.max_size;

        let title: String = Input::with_theme(theme)
            .with_prompt("Write a brief title describing the commit")
            .validate_with(move |input: &String| -> std::result::Result<(), String> {
                if input.trim().is_empty() {
                    return Err("The title can't be empty".to_string());
                }

                let used = type_len + scope_len + ticket_len + input.chars().count();
                if used > max_size {
                    return Err(format!(
                        "Exceeded max length. Title max [{}] characters.",
                        max_size
                    ));
                }

                Ok(())
            })
            .interact_text()?;

        self.state.title = clean_title(&title);

        Ok(())
    }

    /// Ask for the commit body.
    fn step_body(&mut self, theme: &ColorfulTheme) -> Result<()> {
        if let Some(body) = self.body_prefill.take() {
            self.state.body = body;
            return Ok(());
        }

        let prompt = if self.config.commit_body.required {
            "Write a detailed description of the changes".to_string()
        } else {
            format!(
                "Write a detailed description of the changes {}",
                style("(optional)").dim()
            )
        };

        self.state.body = Input::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty(!self.config.commit_body.required)
            .interact_text()?;

        Ok(())
    }

    /// Select footers and collect their content.
    fn step_footers(&mut self, theme: &ColorfulTheme) -> Result<()> {
        let selected = if self.breaking {
            // A breaking commit always carries the breaking-change footer.
            vec![FooterKind::BreakingChange]
        } else {
            let kinds = FooterKind::all();
            let items: Vec<String> = kinds
                .iter()
                .zip(crate::config::default::footer_prompt_options())
                .map(|(_, (label, hint))| format!("{} {}", label, style(hint).dim()))
                .collect();
            let defaults: Vec<bool> = kinds
                .iter()
                .map(|k| self.config.commit_footer.initial_value.contains(k))
                .collect();

            let selection = MultiSelect::with_theme(theme)
                .with_prompt("Select optional footers")
                .items(&items)
                .defaults(&defaults)
                .interact()?;

            selection.into_iter().map(|i| kinds[i]).collect()
        };

        if selected.contains(&FooterKind::BreakingChange) {
            self.state.breaking_title = Input::with_theme(theme)
                .with_prompt("Breaking changes: Write a short title / summary")
                .interact_text()?;

            self.state.breaking_body = Input::with_theme(theme)
                .with_prompt(format!(
                    "Breaking changes: Write a description & migration instructions {}",
                    style("(optional)").dim()
                ))
                .allow_empty(true)
                .interact_text()?;
        }

        if selected.contains(&FooterKind::Deprecated) {
            self.state.deprecates_title = Input::with_theme(theme)
                .with_prompt("Deprecated: Write a short title / summary")
                .interact_text()?;

            self.state.deprecates_body = Input::with_theme(theme)
                .with_prompt(format!(
                    "Deprecated: Write a description {}",
                    style("(optional)").dim()
                ))
                .allow_empty(true)
                .interact_text()?;
        }

        if selected.contains(&FooterKind::Closes) {
            self.state.closes = "Closes:".to_string();
        }

        if selected.contains(&FooterKind::Custom) {
            self.state.custom_footer = Input::with_theme(theme)
                .with_prompt("Write a custom footer")
                .allow_empty(true)
                .interact_text()?;
        }

        Ok(())
    }

    /// Offer to push the new commit.
    fn step_push(&self, term: &Term, theme: &ColorfulTheme, repo: &Repository) -> Result<()> {
        step_banner(term, " Ready to push ")?;

        if self.config.push.confirm {
            let continue_push = Confirm::with_theme(theme)
                .with_prompt("Do you want to push your changes now?")
                .default(true)
                .interact()?;

            if !continue_push {
                term.write_line("Exiting without pushing")?;
                return Ok(());
            }
        }

        let branch_name = repo
            .branch_name()
            .unwrap_or_else(|_| "HEAD".to_string());

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Pushing your changes to {}", branch_name));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = git::push(repo);
        spinner.finish_and_clear();
        result?;

        term.write_line(&style("The changes have been pushed 🥳").green().to_string())?;

        Ok(())
    }
}

fn step_banner(term: &Term, label: &str) -> Result<()> {
    term.write_line(&format!("\n{}", style(label).black().on_green()))?;
    Ok(())
}

fn format_type(value: &str, emoji: &str, emojis: bool) -> String {
    if emojis {
        format!("{} {}", emoji, value)
    } else {
        value.to_string()
    }
}

/// Trim the title and strip a single trailing period.
fn clean_title(title: &str) -> String {
    let trimmed = title.trim();
    match trimmed.strip_suffix('.') {
        Some(rest) => rest.trim().to_string(),
        None => trimmed.to_string(),
    }
}
