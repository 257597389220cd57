//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod deposits;
pub mod details;
pub mod footer;
pub mod header;
pub mod info_panel;
pub mod logs;
pub mod ticker;
