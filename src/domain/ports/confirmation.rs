//! Confirmation Provider Port
//!
//! Operator prompts are injected so workflows can be driven by scripted
//! answers in tests and by a terminal in the binary.

/// How a yes/no answer is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmStyle {
    /// `y`/`yes` (any case) accepts; everything else declines
    YesNo,
    /// Only the literal `yes` accepts (destructive actions)
    ExplicitYes,
}

impl ConfirmStyle {
    pub fn accepts(&self, answer: &str) -> bool {
        let answer = answer.trim();
        match self {
            ConfirmStyle::YesNo => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
            ConfirmStyle::ExplicitYes => answer == "yes",
        }
    }

    /// Hint appended to the prompt
    pub fn hint(&self) -> &'static str {
        match self {
            ConfirmStyle::YesNo => "(y/N)",
            ConfirmStyle::ExplicitYes => "(type 'yes' to confirm)",
        }
    }
}

/// Outcome of a type-to-confirm prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedAnswer {
    Matched,
    /// Something else was typed; callers re-prompt
    Mismatch(String),
    /// Abort sentinel (`q`/`x`) or end of input
    Abort,
}

impl TypedAnswer {
    pub const ABORT_SENTINELS: &'static [&'static str] = &["q", "x", "Q", "X"];

    /// Classify one raw line against the expected text.
    pub fn classify(line: Option<&str>, expected: &str) -> Self {
        let Some(line) = line else {
            return TypedAnswer::Abort;
        };
        let line = line.trim();
        if Self::ABORT_SENTINELS.contains(&line) {
            TypedAnswer::Abort
        } else if line == expected {
            TypedAnswer::Matched
        } else {
            TypedAnswer::Mismatch(line.to_string())
        }
    }
}

/// Source of operator answers.
pub trait ConfirmationProvider {
    /// Ask a yes/no question. End of input declines.
    fn confirm(&self, prompt: &str, style: ConfirmStyle) -> bool;

    /// Ask the operator to type `expected` exactly.
    fn type_to_confirm(&self, prompt: &str, expected: &str) -> TypedAnswer;
}
