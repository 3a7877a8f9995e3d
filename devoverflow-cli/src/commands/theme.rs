//! Theme command - show or change the preferred theme

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::Subcommand;
use colored::Colorize;
use serde::Serialize;

use devoverflow_core::constants::{STORAGE_KEYS, THEMES};
use devoverflow_core::{Config, Theme};

use super::get_app_dir;
use crate::output;

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,
    /// Set the preferred theme
    Set {
        #[arg(value_parser = PossibleValuesParser::new([THEMES.light, THEMES.dark, THEMES.system]))]
        theme: String,
    },
}

#[derive(Serialize)]
struct ThemeStatus {
    key: &'static str,
    theme: Theme,
}

pub fn run(command: Option<ThemeCommands>, json: bool) -> Result<()> {
    let app_dir = get_app_dir()?;

    match command {
        Some(ThemeCommands::Set { theme }) => {
            let theme: Theme = theme.parse()?;
            std::fs::create_dir_all(&app_dir)
                .with_context(|| format!("Failed to create directory: {:?}", app_dir))?;

            let mut config = Config::load(&app_dir)?;
            config.set_theme(theme);
            config.save(&app_dir).context("Failed to save settings")?;

            if json {
                return output::json(ThemeStatus {
                    key: STORAGE_KEYS.theme,
                    theme,
                });
            }
            output::success(&format!("Theme set to {}", theme));
            Ok(())
        }
        Some(ThemeCommands::Show) | None => {
            let config = Config::load(&app_dir)?;

            if json {
                return output::json(ThemeStatus {
                    key: STORAGE_KEYS.theme,
                    theme: config.theme,
                });
            }
            println!("Theme is {}", config.theme.to_string().bold());
            output::info(&format!("Stored under {}", STORAGE_KEYS.theme));
            Ok(())
        }
    }
}
