//! Configuration loading for `.adplan.toml`.
//!
//! The file is optional. Every key has a default, and an unreadable or
//! invalid file degrades to the defaults with a logged warning rather than
//! an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::core::RecalcMode;
use crate::io::output::OutputFormat;
use crate::tui::theme::ThemeMode;

pub const CONFIG_FILE_NAME: &str = ".adplan.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdplanConfig {
    pub calculator: CalculatorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Recalculation trigger: `reactive` recomputes on every edit,
    /// `deferred` waits for the explicit calculate action.
    pub mode: RecalcMode,

    /// Color theme for the interactive calculator.
    pub theme: ThemeMode,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            mode: RecalcMode::Reactive,
            theme: ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used by `estimate` when no `--format` flag is given.
    pub default_format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Terminal,
        }
    }
}

static CONFIG: OnceLock<AdplanConfig> = OnceLock::new();

/// Parse configuration file contents.
pub fn parse_config(contents: &str) -> Result<AdplanConfig, toml::de::Error> {
    toml::from_str(contents)
}

fn try_load_config_from_path(config_path: &Path) -> Option<AdplanConfig> {
    let contents = match std::fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!(
                "Warning: invalid {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Load configuration by searching `start` and its ancestors, bounded.
pub fn load_config_from(start: PathBuf) -> AdplanConfig {
    start
        .ancestors()
        .take(MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No {} found. Using default config.", CONFIG_FILE_NAME);
            AdplanConfig::default()
        })
}

pub fn load_config() -> AdplanConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return AdplanConfig::default();
        }
    };

    load_config_from(current)
}

/// Get the cached configuration
pub fn get_config() -> &'static AdplanConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdplanConfig::default();
        assert_eq!(config.calculator.mode, RecalcMode::Reactive);
        assert_eq!(config.calculator.theme, ThemeMode::Dark);
        assert_eq!(config.output.default_format, OutputFormat::Terminal);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config = parse_config("[calculator]\nmode = \"deferred\"\n").unwrap();
        assert_eq!(config.calculator.mode, RecalcMode::Deferred);
        assert_eq!(config.calculator.theme, ThemeMode::Dark);
        assert_eq!(config.output.default_format, OutputFormat::Terminal);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(parse_config("[calculator]\nmode = \"eager\"\n").is_err());
    }
}
