//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use relvocab_domain::Translator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active locale name
    #[serde(default = "default_locale")]
    pub active_locale: String,

    /// Available translation catalogs
    #[serde(default)]
    pub locales: BTreeMap<String, Locale>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// File this configuration was loaded from
    #[serde(skip)]
    source: Option<PathBuf>,

    /// Set when `source` exists but could not be read; saving is refused
    #[serde(skip)]
    fallback: bool,

    /// Locale used for rendering this run only, never saved
    #[serde(skip)]
    locale_override: Option<String>,
}

/// Translation catalog for one locale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Locale {
    /// Message key to display text
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

impl Translator for Locale {
    fn translate(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Append `related-to` to resolved relationship types
    #[serde(default = "default_true")]
    pub related_to: bool,

    /// Match target types on the exact source type instead of a substring
    #[serde(default)]
    pub exact_targets: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".relvocab").join("config.toml"))
    }

    /// Load configuration from `path` (or the default path), or create default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::path()?,
        };

        let mut config = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            toml::from_str::<Config>(&contents)?
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Self::default()
        };
        config.source = Some(path);
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is broken.
    ///
    /// The fallback keeps the requested path as its source but refuses to
    /// save, so a malformed file is never overwritten and writes never
    /// land anywhere else.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "could not load configuration, using defaults");
                let source = match path {
                    Some(path) => Some(path.to_path_buf()),
                    None => Self::path().ok(),
                };
                Self {
                    source,
                    fallback: true,
                    ..Self::default()
                }
            }
        }
    }

    /// File this configuration reads from and saves to, if known.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Save configuration to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        if self.fallback {
            let path = self
                .source
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default();
            return Err(CliError::NotPermitted(format!(
                "Configuration file '{}' could not be loaded; fix it before saving changes",
                path
            )));
        }

        let path = match &self.source {
            Some(path) => path.clone(),
            None => Self::path()?,
        };

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Point this configuration at a different file.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Name of the locale labels are rendered with.
    pub fn effective_locale(&self) -> &str {
        self.locale_override.as_deref().unwrap_or(&self.active_locale)
    }

    /// Get the locale labels are rendered with.
    pub fn get_active_locale(&self) -> Result<&Locale> {
        let name = self.effective_locale();
        self.locales
            .get(name)
            .ok_or_else(|| CliError::Config(format!("Locale '{}' not found", name)))
    }

    /// Render with `name` for this run without changing the saved active locale.
    pub fn override_locale(&mut self, name: String) -> Result<()> {
        if !self.locales.contains_key(&name) {
            return Err(CliError::Config(format!("Locale '{}' does not exist", name)));
        }
        self.locale_override = Some(name);
        Ok(())
    }

    /// Set a translation in a locale, creating the locale if needed.
    pub fn set_translation(&mut self, locale: String, key: String, value: String) {
        self.locales
            .entry(locale)
            .or_default()
            .translations
            .insert(key, value);
    }

    /// Switch to a different locale.
    pub fn switch_locale(&mut self, name: String) -> Result<()> {
        if !self.locales.contains_key(&name) {
            return Err(CliError::Config(format!("Locale '{}' does not exist", name)));
        }
        self.active_locale = name;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut locales = BTreeMap::new();
        locales.insert("en".to_string(), Locale::default());

        Self {
            active_locale: "en".to_string(),
            locales,
            settings: Settings::default(),
            source: None,
            fallback: false,
            locale_override: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
            related_to: true,
            exact_targets: false,
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.active_locale, "en");
        assert!(config.locales.contains_key("en"));
        assert!(config.settings.color);
        assert!(config.settings.related_to);
        assert!(!config.settings.exact_targets);
    }

    #[test]
    fn test_locale_management() {
        let mut config = Config::default();

        config.set_translation("fr".to_string(), "Not applicable".to_string(), "Non applicable".to_string());
        assert!(config.locales.contains_key("fr"));

        config.switch_locale("fr".to_string()).unwrap();
        let locale = config.get_active_locale().unwrap();
        assert_eq!(locale.translate("Not applicable"), "Non applicable");
        assert_eq!(locale.translate("Active"), "Active");
    }

    #[test]
    fn test_switch_to_nonexistent_locale() {
        let mut config = Config::default();
        let result = config.switch_locale("nonexistent".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default().with_source(&path);
        config.set_translation("de".to_string(), "Not applicable".to_string(), "Nicht zutreffend".to_string());
        config.settings.exact_targets = true;
        config.save().unwrap();

        let reloaded = Config::load(Some(path.as_path())).unwrap();
        assert!(reloaded.settings.exact_targets);
        assert_eq!(
            reloaded.locales["de"].translate("Not applicable"),
            "Nicht zutreffend"
        );
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(config.active_locale, "en");
    }

    #[test]
    fn test_broken_file_keeps_requested_path_and_refuses_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let mut config = Config::load_or_default(Some(path.as_path()));
        assert_eq!(config.source(), Some(path.as_path()));
        assert_eq!(config.active_locale, "en");

        config.set_translation("fr".to_string(), "Not applicable".to_string(), "Non applicable".to_string());
        let result = config.save();
        assert!(matches!(result, Err(CliError::NotPermitted(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "this is = = not toml");
    }

    #[test]
    fn test_valid_file_loads_through_fallback_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");

        let mut config = Config::load_or_default(Some(path.as_path()));
        config.set_translation("fr".to_string(), "Not applicable".to_string(), "Non applicable".to_string());
        config.save().unwrap();

        let reloaded = Config::load(Some(path.as_path())).unwrap();
        assert!(reloaded.locales.contains_key("fr"));
    }

    #[test]
    fn test_locale_override_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default().with_source(&path);
        config.set_translation("fr".to_string(), "Not applicable".to_string(), "Non applicable".to_string());
        config.override_locale("fr".to_string()).unwrap();
        assert_eq!(config.effective_locale(), "fr");
        assert_eq!(config.get_active_locale().unwrap().translate("Not applicable"), "Non applicable");

        config.save().unwrap();
        let reloaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(reloaded.active_locale, "en");
        assert_eq!(reloaded.effective_locale(), "en");
    }

    #[test]
    fn test_override_unknown_locale_rejected() {
        let mut config = Config::default();
        assert!(config.override_locale("xx".to_string()).is_err());
        assert_eq!(config.effective_locale(), "en");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\nformat = \"json\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.related_to);
        assert_eq!(config.settings.history_size, 1000);
    }
}
