// Module declarations
mod app;
pub mod dashboard;
pub mod prompts;
// Re-exports for external use
pub use app::{App, UIConfig, run};
pub use prompts::{Prompt, TerminalNotifier};
