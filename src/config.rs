use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MojiResult;

/// Themes the picker knows how to draw.
pub const THEMES: &[&str] = &["midnight", "catppuccin-mocha", "nord", "dracula"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub appearance: AppearanceConfig,
    pub clipboard: ClipboardConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// tracing filter directive, e.g. "info" or "moji=debug"
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// Pipe the symbol into an external command
    Command,
    /// Use the native clipboard through arboard
    Native,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub backend: ClipboardBackend,
    pub command: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Overrides the `emojis.txt` next to the executable
    pub path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "midnight".to_string(),
            opacity: 1.0,
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            backend: ClipboardBackend::Command,
            command: "xclip".to_string(),
            args: vec!["-selection".to_string(), "clipboard".to_string()],
        }
    }
}

impl DatabaseConfig {
    /// Database file to load: the configured override or the default location.
    pub fn resolve(&self) -> PathBuf {
        match &self.path {
            Some(path) => expand_home(path),
            None => crate::core::Database::default_path(),
        }
    }
}

/// Expand a leading `~` using the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Problems found while loading the config, reported once logging is up.
#[derive(Debug, Default)]
pub struct ConfigReport {
    pub problems: Vec<String>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("moji")
            .join("config.toml")
    }

    /// Load config from the default path, or return defaults if not found
    pub fn load() -> (Self, ConfigReport) {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`. Unreadable or invalid files fall back to defaults.
    ///
    /// Nothing is logged here: the log filter itself comes from the config, so
    /// problems are handed back for the caller to log after setting up tracing.
    pub fn load_from(path: &Path) -> (Self, ConfigReport) {
        let mut report = ConfigReport::default();

        let mut config = if path.exists() {
            match Self::read(path) {
                Ok(config) => config,
                Err(e) => {
                    report
                        .problems
                        .push(format!("Failed to load config {}: {}", path.display(), e));
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.validate(&mut report);
        (config, report)
    }

    fn read(path: &Path) -> MojiResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self, report: &mut ConfigReport) {
        self.appearance.opacity = self.appearance.opacity.clamp(0.5, 1.0);

        if !THEMES.contains(&self.appearance.theme.as_str()) {
            report
                .problems
                .push(format!("Unknown theme {:?}, using midnight", self.appearance.theme));
            self.appearance.theme = AppearanceConfig::default().theme;
        }

        if self.clipboard.command.trim().is_empty() {
            self.clipboard.command = ClipboardConfig::default().command;
        }

        if self.general.log_level.trim().is_empty() {
            self.general.log_level = GeneralConfig::default().log_level;
        }
    }
}
