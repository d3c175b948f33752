// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message rendering.
//!
//! Turns a populated [`CommitState`] plus the configuration into the final
//! message text. Rendering is pure and deterministic; the decorated form
//! differs from the plain form only by color codes, never by content.

use console::style;

use crate::config::{Config, TitlePosition};

use super::state::CommitState;

/// The semantic pieces a rendered message is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Type,
    Scope,
    Bang,
    Ticket,
    Title,
    Body,
    Breaking,
    Deprecated,
    CustomFooter,
    Closes,
}

/// How fragments are written into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// Emit fragment text as-is. This is the form handed to git.
    Plain,
    /// Wrap each fragment in its color, for the preview.
    Colored,
}

impl Decoration {
    /// Apply this decoration to one fragment.
    pub fn apply(self, fragment: Fragment, text: &str) -> String {
        match self {
            Decoration::Plain => text.to_string(),
            Decoration::Colored => colorize(fragment, text),
        }
    }
}

/// Styling is forced so the decorated form is stable even when the output
/// is not a terminal.
fn colorize(fragment: Fragment, text: &str) -> String {
    let styled = match fragment {
        Fragment::Type => style(text).blue(),
        Fragment::Scope => style(text).cyan(),
        Fragment::Bang => style(text).red(),
        Fragment::Ticket => style(text).magenta(),
        Fragment::Breaking => style(text).red(),
        Fragment::Deprecated => style(text).yellow(),
        Fragment::Title | Fragment::Body | Fragment::CustomFooter | Fragment::Closes => style(text),
    };
    styled.force_styling(true).to_string()
}

/// Render the commit message.
///
/// Each step appends to the accumulator and is skipped when its source
/// field is empty. The order is fixed: type, scope, breaking `!`,
/// separator, leading ticket, title, trailing ticket, body, breaking
/// block, deprecation block, custom footer, closes footer.
pub fn render(state: &CommitState, config: &Config, decoration: Decoration) -> String {
    let mut message = String::new();

    if !state.commit_type.is_empty() {
        message.push_str(&decoration.apply(Fragment::Type, &state.commit_type));
    }

    if !state.scope.is_empty() {
        message.push('(');
        message.push_str(&decoration.apply(Fragment::Scope, &state.scope));
        message.push(')');
    }

    if !state.breaking_title.is_empty() && config.breaking_change.add_exclamation_to_title {
        message.push_str(&decoration.apply(Fragment::Bang, "!"));
    }

    // A bare title gets no separator.
    if !state.commit_type.is_empty() || !state.scope.is_empty() {
        message.push_str(": ");
    }

    let ticket_in_title = !state.ticket.is_empty() && config.check_ticket.add_to_title;

    if ticket_in_title && config.check_ticket.title_position == TitlePosition::Start {
        message.push_str(&decoration.apply(Fragment::Ticket, &state.ticket));
        message.push(' ');
    }

    if !state.title.is_empty() {
        message.push_str(&decoration.apply(Fragment::Title, &state.title));
    }

    if ticket_in_title && config.check_ticket.title_position == TitlePosition::End {
        message.push(' ');
        message.push_str(&decoration.apply(Fragment::Ticket, &state.ticket));
    }

    if !state.body.is_empty() {
        message.push_str("\n\n");
        message.push_str(&split_escaped_lines(&state.body, Fragment::Body, decoration));
    }

    if !state.breaking_title.is_empty() {
        message.push_str("\n\n");
        let title = format!("BREAKING CHANGE: {}", state.breaking_title);
        message.push_str(&decoration.apply(Fragment::Breaking, &title));
    }

    if !state.breaking_body.is_empty() {
        message.push_str("\n\n");
        message.push_str(&decoration.apply(Fragment::Breaking, &state.breaking_body));
    }

    if !state.deprecates_title.is_empty() {
        message.push_str("\n\n");
        let title = format!("DEPRECATED: {}", state.deprecates_title);
        message.push_str(&decoration.apply(Fragment::Deprecated, &title));
    }

    if !state.deprecates_body.is_empty() {
        message.push_str("\n\n");
        message.push_str(&decoration.apply(Fragment::Deprecated, &state.deprecates_body));
    }

    if !state.custom_footer.is_empty() {
        message.push_str("\n\n");
        message.push_str(&split_escaped_lines(
            &state.custom_footer,
            Fragment::CustomFooter,
            decoration,
        ));
    }

    if !state.closes.is_empty() && !state.ticket.is_empty() {
        message.push_str("\n\n");
        message.push_str(&decoration.apply(Fragment::Closes, &state.closes));
        message.push(' ');
        message.push_str(&decoration.apply(Fragment::Ticket, &state.ticket));
    }

    message
}

/// Split on the literal two-character sequence `\` `n`.
///
/// Multi-line answers come from single-line prompts, so line breaks arrive
/// as the typed escape, not as real newlines.
fn split_escaped_lines(text: &str, fragment: Fragment, decoration: Decoration) -> String {
    text.split("\\n")
        .map(|segment| decoration.apply(fragment, segment.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_state() -> CommitState {
        CommitState {
            commit_type: "✨ feat".to_string(),
            scope: "app".to_string(),
            ticket: "JIRA-12".to_string(),
            title: "add login".to_string(),
            ..CommitState::default()
        }
    }

    fn full_state() -> CommitState {
        CommitState {
            body: "line one\\nline two".to_string(),
            breaking_title: "changes auth flow".to_string(),
            breaking_body: "tokens must be reissued".to_string(),
            deprecates_title: "old login endpoint".to_string(),
            deprecates_body: "use /v2/login".to_string(),
            custom_footer: "Reviewed-by: someone".to_string(),
            closes: "Closes:".to_string(),
            ..base_state()
        }
    }

    #[test]
    fn test_title_line_with_leading_ticket() {
        let rendered = render(&base_state(), &Config::default(), Decoration::Plain);
        assert_eq!(rendered, "✨ feat(app): JIRA-12 add login");
    }

    #[test]
    fn test_breaking_adds_exclamation_and_footer() {
        let mut state = base_state();
        state.breaking_title = "changes auth flow".to_string();

        let rendered = render(&state, &Config::default(), Decoration::Plain);
        assert_eq!(
            rendered,
            "✨ feat(app)!: JIRA-12 add login\n\nBREAKING CHANGE: changes auth flow"
        );
    }

    #[test]
    fn test_no_exclamation_when_disabled() {
        let mut state = base_state();
        state.breaking_title = "changes auth flow".to_string();

        let mut config = Config::default();
        config.breaking_change.add_exclamation_to_title = false;

        let rendered = render(&state, &config, Decoration::Plain);
        assert!(rendered.starts_with("✨ feat(app): "));
        assert!(rendered.contains("BREAKING CHANGE: changes auth flow"));
    }

    #[test]
    fn test_ticket_at_end() {
        let mut config = Config::default();
        config.check_ticket.title_position = crate::config::TitlePosition::End;

        let rendered = render(&base_state(), &config, Decoration::Plain);
        assert_eq!(rendered, "✨ feat(app): add login JIRA-12");
    }

    #[test]
    fn test_ticket_left_out_of_title() {
        let mut config = Config::default();
        config.check_ticket.add_to_title = false;

        let rendered = render(&base_state(), &config, Decoration::Plain);
        assert_eq!(rendered, "✨ feat(app): add login");
    }

    #[test]
    fn test_bare_title_has_no_separator() {
        let state = CommitState {
            title: "add login".to_string(),
            ..CommitState::default()
        };

        let rendered = render(&state, &Config::default(), Decoration::Plain);
        assert_eq!(rendered, "add login");
    }

    #[test]
    fn test_body_splits_on_literal_escape() {
        let state = CommitState {
            title: "add login".to_string(),
            body: "line one\\nline two".to_string(),
            ..CommitState::default()
        };

        let rendered = render(&state, &Config::default(), Decoration::Plain);
        assert!(rendered.contains("line one\nline two"));
        assert!(!rendered.contains("\\n"));
    }

    #[test]
    fn test_body_keeps_real_newlines() {
        let state = CommitState {
            title: "add login".to_string(),
            body: "already\nsplit".to_string(),
            ..CommitState::default()
        };

        let rendered = render(&state, &Config::default(), Decoration::Plain);
        assert!(rendered.contains("already\nsplit"));
    }

    #[test]
    fn test_closes_requires_ticket() {
        let mut state = base_state();
        state.closes = "Closes:".to_string();
        state.ticket = String::new();

        let rendered = render(&state, &Config::default(), Decoration::Plain);
        assert!(!rendered.contains("Closes:"));
    }

    #[test]
    fn test_closes_with_ticket() {
        let mut state = base_state();
        state.closes = "Closes:".to_string();

        let rendered = render(&state, &Config::default(), Decoration::Plain);
        assert!(rendered.ends_with("\n\nCloses: JIRA-12"));
    }

    #[test]
    fn test_deprecation_block() {
        let mut state = base_state();
        state.deprecates_title = "old login endpoint".to_string();
        state.deprecates_body = "use /v2/login".to_string();

        let rendered = render(&state, &Config::default(), Decoration::Plain);
        assert!(rendered.contains("\n\nDEPRECATED: old login endpoint\n\nuse /v2/login"));
    }

    #[test]
    fn test_stripped_decorated_equals_plain() {
        let config = Config::default();
        let state = full_state();

        let plain = render(&state, &config, Decoration::Plain);
        let colored = render(&state, &config, Decoration::Colored);

        assert_ne!(plain, colored);
        assert_eq!(console::strip_ansi_codes(&colored), plain);
    }

    #[test]
    fn test_stripped_invariant_holds_for_sparse_states() {
        let config = Config::default();
        let states = [
            CommitState::default(),
            CommitState {
                title: "t".to_string(),
                ..CommitState::default()
            },
            CommitState {
                commit_type: "fix".to_string(),
                body: "a\\nb".to_string(),
                ..CommitState::default()
            },
        ];

        for state in &states {
            let plain = render(state, &config, Decoration::Plain);
            let colored = render(state, &config, Decoration::Colored);
            assert_eq!(console::strip_ansi_codes(&colored), plain);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = Config::default();
        let state = full_state();

        assert_eq!(
            render(&state, &config, Decoration::Colored),
            render(&state, &config, Decoration::Colored)
        );
    }

    #[test]
    fn test_empty_state_renders_empty() {
        let rendered = render(&CommitState::default(), &Config::default(), Decoration::Plain);
        assert!(rendered.is_empty());
    }
}
