use super::{Candidate, Selection, Selector};
use crate::config::display::{ACTIVE_PREFIX, ANSWERED_PREFIX, PROMPT_LABEL};
use crate::context::ContextResult;
use inquire::{
    InquireError, Select,
    ui::{Color, RenderConfig, StyleSheet, Styled},
};
use std::io::{self, IsTerminal};

/// Asks the user to pick a context from a single-choice list.
#[derive(Debug, Default)]
pub struct InteractiveSelector;

impl Selector for InteractiveSelector {
    fn select(&self, candidates: Vec<Candidate>) -> ContextResult<Selection> {
        // Never prompt on piped input, even when a controlling terminal exists.
        if !io::stdin().is_terminal() {
            return interpret(Err(InquireError::NotTTY));
        }

        let cursor = candidates
            .iter()
            .position(Candidate::is_current)
            .unwrap_or(0);

        let answer = Select::new(PROMPT_LABEL, candidates)
            .with_starting_cursor(cursor)
            .with_render_config(render_config())
            .prompt();

        interpret(answer)
    }
}

/// Green rocket on the highlighted entry, green check once answered.
fn render_config() -> RenderConfig<'static> {
    RenderConfig::default()
        .with_highlighted_option_prefix(Styled::new(ACTIVE_PREFIX).with_fg(Color::LightGreen))
        .with_selected_option(Some(StyleSheet::new().with_fg(Color::LightGreen)))
        .with_answered_prompt_prefix(Styled::new(ANSWERED_PREFIX).with_fg(Color::LightGreen))
}

/// Esc and Ctrl-C are a cancellation, not a failure.
fn interpret(answer: Result<Candidate, InquireError>) -> ContextResult<Selection> {
    match answer {
        Ok(candidate) => Ok(Selection::Chosen(candidate)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(Selection::Cancelled)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ContextError, ContextName};

    #[test]
    fn test_render_config_marks_active_and_answered() {
        let config = render_config();
        assert_eq!(config.highlighted_option_prefix.content, "🚀");
        assert_eq!(config.answered_prompt_prefix.content, "✔");
        assert_eq!(
            config.highlighted_option_prefix.style.fg,
            Some(Color::LightGreen)
        );
    }

    #[test]
    fn test_answer_is_chosen() {
        let candidate = Candidate::new(ContextName::from("dev"), false);
        let selection = interpret(Ok(candidate.clone())).unwrap();
        assert_eq!(selection, Selection::Chosen(candidate));
    }

    #[test]
    fn test_interrupt_is_cancelled() {
        let selection = interpret(Err(InquireError::OperationInterrupted)).unwrap();
        assert_eq!(selection, Selection::Cancelled);
    }

    #[test]
    fn test_escape_is_cancelled() {
        let selection = interpret(Err(InquireError::OperationCanceled)).unwrap();
        assert_eq!(selection, Selection::Cancelled);
    }

    #[test]
    fn test_missing_tty_is_an_error() {
        let err = interpret(Err(InquireError::NotTTY)).unwrap_err();
        assert!(matches!(err, ContextError::Prompt(InquireError::NotTTY)));
    }
}
