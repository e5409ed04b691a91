//! Output formatting for address reports.
//!
//! This module handles rendering addresses:
//! - [`json`] - JSON summaries
//! - [`terminal`] - Terminal output with colors

pub mod json;
pub mod terminal;

pub use json::address_json;
pub use terminal::{address_report, format_field};
