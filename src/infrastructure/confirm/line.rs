//! Line-based confirmation over any reader/writer pair

use std::cell::RefCell;
use std::io::{self, BufRead, BufReader, Stderr, Stdin, Write};

use crate::domain::ports::confirmation::{ConfirmStyle, ConfirmationProvider, TypedAnswer};

/// Prompts on `output`, reads one line per answer from `input`.
pub struct LineConfirmer<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

/// Line confirmer bound to the process's stdin and stderr
pub type StdinConfirmer = LineConfirmer<BufReader<Stdin>, Stderr>;

impl StdinConfirmer {
    pub fn stdio() -> Self {
        LineConfirmer::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> LineConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    /// `None` on end of input or read error
    fn ask(&self, prompt: &str) -> Option<String> {
        {
            let mut out = self.output.borrow_mut();
            let _ = write!(out, "{}", prompt);
            let _ = out.flush();
        }
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl<R: BufRead, W: Write> ConfirmationProvider for LineConfirmer<R, W> {
    fn confirm(&self, prompt: &str, style: ConfirmStyle) -> bool {
        self.ask(&format!("{} {}: ", prompt, style.hint()))
            .is_some_and(|answer| style.accepts(&answer))
    }

    fn type_to_confirm(&self, prompt: &str, expected: &str) -> TypedAnswer {
        TypedAnswer::classify(self.ask(&format!("{}: ", prompt)).as_deref(), expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn confirmer(input: &str) -> LineConfirmer<Cursor<Vec<u8>>, Vec<u8>> {
        LineConfirmer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn yes_no_reads_one_line_per_prompt() {
        let c = confirmer("y\nn\n");
        assert!(c.confirm("Re-initialize?", ConfirmStyle::YesNo));
        assert!(!c.confirm("Continue?", ConfirmStyle::YesNo));
        let shown = String::from_utf8(c.into_output()).unwrap();
        assert!(shown.contains("Re-initialize? (y/N): "));
    }

    #[test]
    fn end_of_input_declines() {
        let c = confirmer("");
        assert!(!c.confirm("Continue?", ConfirmStyle::YesNo));
        assert_eq!(c.type_to_confirm("Project name", "app"), TypedAnswer::Abort);
    }

    #[test]
    fn explicit_yes_rejects_y() {
        let c = confirmer("y\nyes\n");
        assert!(!c.confirm("Delete?", ConfirmStyle::ExplicitYes));
        assert!(c.confirm("Delete?", ConfirmStyle::ExplicitYes));
    }

    #[test]
    fn typed_answers_are_read_in_order() {
        let c = confirmer("nope\napp\n");
        assert_eq!(
            c.type_to_confirm("Project name", "app"),
            TypedAnswer::Mismatch("nope".to_string())
        );
        assert_eq!(c.type_to_confirm("Project name", "app"), TypedAnswer::Matched);
    }
}
