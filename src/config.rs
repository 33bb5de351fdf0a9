//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`PROMPTLINE_NO_COLOR`, `PROMPTLINE_PAGE_SIZE`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./promptline.toml in the current directory
//! 4. $XDG_CONFIG_HOME/promptline/promptline.toml
//!    (or ~/.config/promptline/promptline.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use crate::settings;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub display: DisplayConfig,
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    /// Visible window height in rendered lines.
    pub page_size: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            page_size: settings::DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    display: DisplayConfig,
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    let config_text = if let Some(p) = path_override {
        // Explicit path fails loudly when missing.
        std::fs::read_to_string(p)?
    } else if let Ok(text) = std::fs::read_to_string("promptline.toml") {
        text
    } else if let Some(dir) = config_root_dir() {
        let global = dir.join("promptline").join("promptline.toml");
        std::fs::read_to_string(global).unwrap_or_default()
    } else {
        String::new()
    };

    parse_config(&config_text, |name| std::env::var(name).ok())
}

fn parse_config<FEnv>(config_text: &str, env_lookup: FEnv) -> Result<Config, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let parsed: FileConfig = toml::from_str(config_text)?;
    let mut config = Config {
        display: parsed.display,
    };

    if config.display.page_size == 0 {
        return Err(ConfigError::Invalid(
            "display.page_size must be at least 1".into(),
        ));
    }

    if env_lookup("PROMPTLINE_NO_COLOR").is_some() {
        config.display.color = false;
    }
    if let Some(page_size) = env_lookup("PROMPTLINE_PAGE_SIZE") {
        let parsed = page_size.parse::<usize>().ok().filter(|n| *n > 0);
        let Some(parsed) = parsed else {
            return Err(ConfigError::Invalid(format!(
                "invalid PROMPTLINE_PAGE_SIZE value `{page_size}`: expected positive integer"
            )));
        };
        config.display.page_size = parsed;
    }

    Ok(config)
}

/// Return the default per-user config path (`~/.config/promptline/promptline.toml`).
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join("promptline").join("promptline.toml"))
}

fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let c = Config::default();
        assert!(c.display.color);
        assert_eq!(c.display.page_size, settings::DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn parse_partial_toml() {
        let c = parse_config(
            r#"
            [display]
            page_size = 3
        "#,
            |_| None,
        )
        .unwrap();
        assert_eq!(c.display.page_size, 3);
        assert!(c.display.color);
    }

    #[test]
    fn parse_empty_string() {
        let c = parse_config("", |_| None).unwrap();
        assert_eq!(c.display, DisplayConfig::default());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = parse_config("[display]\npage_size = 0\n", |_| None).unwrap_err();
        assert!(err.to_string().contains("page_size"), "got: {err}");
    }

    #[test]
    fn env_no_color_overrides_file() {
        let c = parse_config(
            "[display]\ncolor = true\n",
            |name| (name == "PROMPTLINE_NO_COLOR").then(|| "1".into()),
        )
        .unwrap();
        assert!(!c.display.color);
    }

    #[test]
    fn env_page_size_overrides_file() {
        let c = parse_config(
            "[display]\npage_size = 3\n",
            |name| (name == "PROMPTLINE_PAGE_SIZE").then(|| "12".into()),
        )
        .unwrap();
        assert_eq!(c.display.page_size, 12);
    }

    #[test]
    fn malformed_env_page_size_is_rejected() {
        let err = parse_config("", |name| {
            (name == "PROMPTLINE_PAGE_SIZE").then(|| "lots".into())
        })
        .unwrap_err();
        assert!(err.to_string().contains("PROMPTLINE_PAGE_SIZE"), "got: {err}");
    }
}
