//! # Selection Prompt
//!
//! The seam between the session loop and the human at the keyboard.
//!
//! A prompt shows a list of labels and reports which one was picked by
//! **index**. The session maps the index straight back to the menu option,
//! so two options that happen to render the same label can never be
//! confused.

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::error::CliResult;

/// Something that can ask the user to pick one of several labels.
pub trait Prompt {
    /// Shows `choices` under `message` and returns the picked index.
    fn select(&mut self, message: &str, choices: &[String]) -> CliResult<usize>;
}

/// Arrow-key selection list on the terminal.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    /// Creates a prompt that marks the highlighted choice with `pointer`.
    pub fn new(pointer: &str) -> Self {
        let theme = ColorfulTheme {
            active_item_prefix: style(pointer.to_string()).for_stderr().green(),
            inactive_item_prefix: style(" ".repeat(pointer.chars().count())).for_stderr(),
            ..ColorfulTheme::default()
        };

        TerminalPrompt { theme }
    }
}

impl Prompt for TerminalPrompt {
    fn select(&mut self, message: &str, choices: &[String]) -> CliResult<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact()?;
        Ok(index)
    }
}
