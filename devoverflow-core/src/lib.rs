//! DevOverflow Core - shared support code for the DevOverflow front end
//!
//! - **constants**: navigation, pagination, validation bounds, API paths,
//!   timeouts, storage keys and theme identifiers
//! - **utils**: formatting helpers, short random ids and an async delay
//! - **domain**: data shapes exchanged with other layers (User, Theme)
//! - **config**: the local settings file (preferred theme)

pub mod config;
pub mod constants;
pub mod domain;
pub mod utils;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{Theme, User};
pub use utils::{delay, format_date, format_number, generate_id, truncate_text};
