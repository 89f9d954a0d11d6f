//! UI dialog collaborator: the continue prompt and the name prompt.

use std::io::{BufRead, Write};

pub trait Dialog: Send {
    /// Yes/no question.
    fn confirm(&mut self, prompt: &str) -> bool;
    /// Free-text question. May return an empty string.
    fn prompt_text(&mut self, prompt: &str) -> String;
}

/// Line-based dialog over any reader/writer pair (stdin/stdout in the binary).
pub struct TerminalDialog<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{question} ").and_then(|_| self.output.flush()) {
            tracing::warn!(error = %e, "could not write prompt");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "could not read answer");
                None
            }
        }
    }
}

impl<R: BufRead + Send, W: Write + Send> Dialog for TerminalDialog<R, W> {
    /// Anything starting with `y` is yes; end of input is no.
    fn confirm(&mut self, prompt: &str) -> bool {
        self.ask(&format!("{prompt} [y/N]"))
            .is_some_and(|answer| answer.to_ascii_lowercase().starts_with('y'))
    }

    fn prompt_text(&mut self, prompt: &str) -> String {
        self.ask(&format!("{prompt}:")).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn confirm_reads_yes_and_no() {
        let mut dialog = TerminalDialog::new(Cursor::new("Yes\nn\n"), Vec::new());
        assert!(dialog.confirm("Game Over. Continue?"));
        assert!(!dialog.confirm("Game Over. Continue?"));
        let written = String::from_utf8(dialog.output.clone()).unwrap();
        assert!(written.starts_with("Game Over. Continue? [y/N] "));
    }

    #[test]
    fn end_of_input_declines_and_gives_empty_name() {
        let mut dialog = TerminalDialog::new(Cursor::new(""), Vec::new());
        assert!(!dialog.confirm("Continue?"));
        assert_eq!(dialog.prompt_text("Enter your name"), "");
    }

    #[test]
    fn name_is_trimmed() {
        let mut dialog = TerminalDialog::new(Cursor::new("  Neo \n"), Vec::new());
        assert_eq!(dialog.prompt_text("Enter your name"), "Neo");
        let written = String::from_utf8(dialog.output).unwrap();
        assert_eq!(written, "Enter your name: ");
    }
}
