//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod charts;
pub mod footer;
pub mod form;
pub mod header;
pub mod logs;
pub mod modal;
pub mod recent;
pub mod result;
pub mod summary;
