//! dialoguer-backed confirmation for interactive terminals

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::domain::ports::confirmation::{ConfirmStyle, ConfirmationProvider, TypedAnswer};

/// Prompts rendered by dialoguer on stderr.
pub struct TerminalConfirmer {
    theme: ColorfulTheme,
}

impl TerminalConfirmer {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalConfirmer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationProvider for TerminalConfirmer {
    fn confirm(&self, prompt: &str, style: ConfirmStyle) -> bool {
        match style {
            ConfirmStyle::YesNo => Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(false)
                .interact()
                .unwrap_or(false),
            ConfirmStyle::ExplicitYes => Input::<String>::with_theme(&self.theme)
                .with_prompt(format!("{} {}", prompt, style.hint()))
                .allow_empty(true)
                .interact_text()
                .map(|answer| style.accepts(&answer))
                .unwrap_or(false),
        }
    }

    fn type_to_confirm(&self, prompt: &str, expected: &str) -> TypedAnswer {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .ok();
        TypedAnswer::classify(answer.as_deref(), expected)
    }
}
