//! User dialogs
//!
//! The controller only asks yes/no questions and shows messages; how that
//! happens is up to the host.

use std::io::{self, BufRead, Write};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Ask a yes/no question; `false` when declined or unanswerable.
    async fn confirm(&self, prompt: &str) -> bool;

    /// Show a message to the user.
    async fn notify(&self, message: &str);
}

/// Console dialogs on stdin/stdout for headless and one-shot commands.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier {
    assume_yes: bool,
}

impl ConsoleNotifier {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait::async_trait]
impl Notifier for ConsoleNotifier {
    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let prompt = prompt.to_string();
        tokio::task::spawn_blocking(move || {
            print!("{} [y/N] ", prompt);
            let _ = io::stdout().flush();
            let mut answer = String::new();
            match io::stdin().lock().read_line(&mut answer) {
                Ok(_) => is_affirmative(&answer),
                Err(_) => false,
            }
        })
        .await
        .unwrap_or(false)
    }

    async fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

/// `y`/`yes` in any case, surrounding whitespace ignored.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
    }

    #[tokio::test]
    async fn test_assume_yes_skips_prompt() {
        let notifier = ConsoleNotifier::new(true);
        assert!(notifier.confirm("Clear all prediction history?").await);
    }
}
