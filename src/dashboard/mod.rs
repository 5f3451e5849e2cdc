//! Dashboard core
//!
//! Everything that turns statistics into a view, independent of the host
//! that draws it.

pub mod charts;
pub mod controller;
pub mod form;
pub mod format;
pub mod notifier;
pub mod recent;
pub mod summary;
pub mod view;

pub use controller::DashboardController;
pub use notifier::{ConsoleNotifier, Notifier};
