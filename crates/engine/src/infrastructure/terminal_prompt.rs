//! Terminal confirmation adapter used by the `itemforge` binary.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use crate::infrastructure::ports::{ConfirmPort, Confirmation};

/// Asks on stderr, reads `y`/`yes` (any case) from the given input.
/// Anything else, including end of input, is a "no".
pub struct TerminalConfirm<R> {
    input: Mutex<R>,
}

impl TerminalConfirm<io::BufReader<io::Stdin>> {
    pub fn stdin() -> Self {
        Self::new(io::BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> TerminalConfirm<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl<R: BufRead + Send> ConfirmPort for TerminalConfirm<R> {
    fn confirm(&self, request: &Confirmation) -> bool {
        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "{} [y/N] ", request);
        let _ = stderr.flush();

        let mut input = match self.input.lock() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire input lock: {}", e);
                return false;
            }
        };

        let mut answer = String::new();
        match input.read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation answer");
                false
            }
        }
    }
}
