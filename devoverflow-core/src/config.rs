//! Configuration management
//!
//! Preferences live in `settings.json` inside the application directory:
//! ```json
//! {
//!   "app": { "theme": "dark", ... }
//! }
//! ```
//! Fields this crate does not manage are kept intact when saving.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::domain::result::{Error, Result};
use crate::domain::Theme;

/// Environment variable that overrides the stored theme
pub const THEME_ENV_VAR: &str = "DEVOVERFLOW_THEME";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default, deserialize_with = "lenient_theme")]
    theme: Theme,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Unknown or mistyped theme values fall back to the default instead of
/// failing the whole settings file
fn lenient_theme<'de, D>(deserializer: D) -> std::result::Result<Theme, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value.as_str().map(str::parse::<Theme>) {
        Some(Ok(theme)) => Ok(theme),
        _ => {
            warn!(value = %value, "unknown theme in settings, using default");
            Ok(Theme::default())
        }
    }
}

/// Effective configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
}

impl Config {
    /// Load config from the application directory
    ///
    /// The theme can come from:
    /// 1. `DEVOVERFLOW_THEME` (light, dark or system)
    /// 2. The settings file
    /// 3. The default, `system`
    pub fn load(app_dir: &Path) -> Result<Self> {
        let settings_path = app_dir.join(SETTINGS_FILE);
        let raw = read_settings(app_dir)?.unwrap_or_else(|e| {
            warn!(path = %settings_path.display(), error = %e, "unparsable settings, using defaults");
            SettingsFile::default()
        });

        let theme = resolve_theme(std::env::var(THEME_ENV_VAR).ok().as_deref(), raw.app.theme);

        debug!(theme = %theme, dir = %app_dir.display(), "loaded config");
        Ok(Self { theme })
    }

    /// Save config to the application directory
    ///
    /// Refuses to overwrite a settings file it cannot parse.
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        let settings_path = app_dir.join(SETTINGS_FILE);

        // Re-read so unmanaged fields survive
        let mut settings = read_settings(app_dir)?.map_err(|e| {
            Error::config(format!(
                "refusing to overwrite unparsable {}: {}",
                settings_path.display(),
                e
            ))
        })?;
        settings.app.theme = self.theme;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        debug!(theme = %self.theme, path = %settings_path.display(), "saved config");
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

/// Apply an environment override on top of the stored theme
fn resolve_theme(env_value: Option<&str>, stored: Theme) -> Theme {
    match env_value {
        Some(value) => value.parse::<Theme>().unwrap_or_else(|e| {
            warn!(value = %value, error = %e, "ignoring {}", THEME_ENV_VAR);
            stored
        }),
        None => stored,
    }
}

/// Read settings.json; the outer error is I/O, the inner one a parse failure
fn read_settings(app_dir: &Path) -> Result<std::result::Result<SettingsFile, serde_json::Error>> {
    let settings_path = app_dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(Ok(SettingsFile::default()));
    }

    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_use_defaults() {
        let dir = TempDir::new().unwrap();
        let raw = read_settings(dir.path()).unwrap().unwrap();
        assert_eq!(raw.app.theme, Theme::System);
    }

    #[test]
    fn test_unparsable_settings_load_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();
        assert!(read_settings(dir.path()).unwrap().is_err());
        assert!(Config::load(dir.path()).is_ok());
    }

    #[test]
    fn test_save_refuses_unparsable_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config { theme: Theme::Dark }.save(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_unknown_theme_keeps_other_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(
            &path,
            r#"{"app":{"theme":"Dark","fontSize":14},"plugins":{"x":true}}"#,
        )
        .unwrap();

        let raw = read_settings(dir.path()).unwrap().unwrap();
        assert_eq!(raw.app.theme, Theme::System);

        let mut config = Config::load(dir.path()).unwrap();
        config.set_theme(Theme::Light);
        config.save(dir.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["app"]["theme"], "light");
        assert_eq!(value["app"]["fontSize"], 14);
        assert_eq!(value["plugins"]["x"], true);
    }

    #[test]
    fn test_non_string_theme_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), r#"{"app":{"theme":3}}"#).unwrap();
        let raw = read_settings(dir.path()).unwrap().unwrap();
        assert_eq!(raw.app.theme, Theme::System);
    }

    #[test]
    fn test_env_override_wins() {
        assert_eq!(resolve_theme(Some("dark"), Theme::Light), Theme::Dark);
        assert_eq!(resolve_theme(None, Theme::Light), Theme::Light);
    }

    #[test]
    fn test_invalid_env_override_is_ignored() {
        assert_eq!(resolve_theme(Some("sepia"), Theme::Light), Theme::Light);
        assert_eq!(resolve_theme(Some(""), Theme::Dark), Theme::Dark);
    }

    #[test]
    fn test_save_preserves_unmanaged_fields() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"app":{"theme":"light","fontSize":14},"plugins":{"x":true}}"#,
        )
        .unwrap();

        let config = Config { theme: Theme::Dark };
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["app"]["theme"], "dark");
        assert_eq!(value["app"]["fontSize"], 14);
        assert_eq!(value["plugins"]["x"], true);
    }
}
