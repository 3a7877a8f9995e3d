//! CLI command implementations

pub mod constants;
pub mod delay;
pub mod format;
pub mod id;
pub mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the application directory from environment or default
pub fn get_app_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("DEVOVERFLOW_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".devoverflow"))
}
