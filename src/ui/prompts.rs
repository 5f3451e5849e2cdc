//! Modal dialogs for the terminal host
//!
//! The controller runs on background tasks; its dialogs are queued to the UI
//! loop, which shows them one at a time and sends the answer back.

use crate::dashboard::notifier::Notifier;
use tokio::sync::{mpsc, oneshot};

/// A dialog waiting to be shown.
#[derive(Debug)]
pub enum Prompt {
    Confirm {
        message: String,
        reply: oneshot::Sender<bool>,
    },
    Notify {
        message: String,
        ack: oneshot::Sender<()>,
    },
}

impl Prompt {
    pub fn message(&self) -> &str {
        match self {
            Prompt::Confirm { message, .. } | Prompt::Notify { message, .. } => message,
        }
    }

    /// Answer the dialog. Notifications ignore the answer.
    pub fn resolve(self, accepted: bool) {
        match self {
            Prompt::Confirm { reply, .. } => {
                let _ = reply.send(accepted);
            }
            Prompt::Notify { ack, .. } => {
                let _ = ack.send(());
            }
        }
    }
}

/// [`Notifier`] backed by the terminal's modal queue.
///
/// Once the UI is gone every confirmation reads as declined and
/// notifications return immediately.
#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    sender: mpsc::Sender<Prompt>,
}

impl TerminalNotifier {
    pub fn new(sender: mpsc::Sender<Prompt>) -> Self {
        Self { sender }
    }
}

#[async_trait::async_trait]
impl Notifier for TerminalNotifier {
    async fn confirm(&self, prompt: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let prompt = Prompt::Confirm {
            message: prompt.to_string(),
            reply,
        };
        if self.sender.send(prompt).await.is_err() {
            return false;
        }
        answer.await.unwrap_or(false)
    }

    async fn notify(&self, message: &str) {
        let (ack, dismissed) = oneshot::channel();
        let prompt = Prompt::Notify {
            message: message.to_string(),
            ack,
        };
        if self.sender.send(prompt).await.is_ok() {
            let _ = dismissed.await;
        }
    }
}
