//! Terminal confirmation prompt

use std::io::{self, Write};

use snsync_core::Confirm;

/// Interactive ok/cancel prompt on the terminal
///
/// With `assume_yes` set every prompt is answered positively, for
/// non-interactive use (editor hooks, scripts).
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for TerminalPrompt {
    fn ok_cancel(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        println!();
        println!("{}", message);
        print!("Proceed? [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }

        matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes_skips_prompt() {
        let prompt = TerminalPrompt::new(true);
        assert!(prompt.ok_cancel("overwrite?"));
    }
}
