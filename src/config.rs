use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::wizard::Variant;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Which flow to run: short (4 steps) or full (5 steps)
    #[serde(default)]
    pub variant: Variant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Font with Hangul coverage, loaded once at startup
    #[serde(default = "default_font_path")]
    pub font_path: String,
    /// Directory the exported PDF is saved into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_font_path() -> String {
    "NanumGothic.ttf".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            font_path: default_font_path(),
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Where penpal keeps its own files (logs)
    #[serde(default = "default_state_path")]
    pub state: String,
}

fn default_state_path() -> String {
    ".penpal".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            state: default_state_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file in TUI mode (false = stderr for debugging)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
        }
    }
}

impl Config {
    /// User-level config file (~/.config/penpal/config.toml)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("penpal").join("config.toml"))
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so penpal works without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables, e.g. PENPAL__EXPORT__FONT_PATH
        builder = builder.add_source(
            config::Environment::with_prefix("PENPAL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Write the config as TOML
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path, toml_str).context("Failed to write config file")?;

        Ok(())
    }

    /// Save to `path`, refusing to replace an existing file unless asked
    pub fn write_new(&self, path: &std::path::Path, overwrite: bool) -> Result<()> {
        if path.exists() && !overwrite {
            anyhow::bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }
        self.save(path)
    }

    fn absolute(path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }

    /// Get absolute path to the letter font
    pub fn font_path(&self) -> PathBuf {
        Self::absolute(&self.export.font_path)
    }

    /// Get absolute path to the PDF output directory
    pub fn output_dir(&self) -> PathBuf {
        Self::absolute(&self.export.output_dir)
    }

    /// Get absolute path to state directory
    pub fn state_path(&self) -> PathBuf {
        Self::absolute(&self.paths.state)
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        self.state_path().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.wizard.variant, Variant::Full);
        assert_eq!(config.export.font_path, "NanumGothic.ttf");
        assert_eq!(config.logging.level, "info");
        assert!(config.logs_path().ends_with(".penpal/logs"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("penpal.toml");
        std::fs::write(
            &path,
            "[wizard]\nvariant = \"short\"\n\n[export]\noutput_dir = \"/tmp/letters\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.wizard.variant, Variant::Short);
        assert_eq!(config.export.output_dir, "/tmp/letters");
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/letters"));
        // untouched sections keep their defaults
        assert_eq!(config.export.font_path, "NanumGothic.ttf");
    }

    #[test]
    fn test_save_round_trips_through_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.logging.level = "debug".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(loaded.logging.level, "debug");
    }

    #[test]
    fn test_write_new_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let err = Config::default().write_new(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        Config::default().write_new(&path, true).unwrap();
        let loaded = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(loaded.export.font_path, "NanumGothic.ttf");
    }
}
