//! Utility functions
//!
//! Small independent helpers for formatting, ids and pausing async work.
//! No function here depends on another or keeps state between calls.

pub mod delay;
pub mod format;
pub mod id;

pub use delay::{delay, delay_or_cancel};
pub use format::{format_date, format_number, truncate_text};
pub use id::{generate_id, generate_id_with, ID_LENGTH};
