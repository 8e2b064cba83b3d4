use anyhow::{Context, Result};
use changes_core::{DecodePolicy, Point, ORIGIN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Settings read from `--config`; every key is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub policy: DecodePolicy,
    pub origin: Point,
    pub render: RenderConfig,
    pub palette: PaletteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            policy: DecodePolicy::default(),
            origin: ORIGIN,
            render: RenderConfig::default(),
            palette: PaletteConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub radius: u32,
    pub background: String,
    pub title_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 450,
            height: 150,
            radius: 4,
            background: "black".to_string(),
            title_color: "black".to_string(),
        }
    }
}

/// Overrides on top of the built-in quality colors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub fallback: Option<String>,
    pub colors: BTreeMap<String, String>,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid config")
    }
}

/// Read the config file, or defaults when none is given
pub fn load(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    Config::from_toml(&text).with_context(|| format!("In {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r##"
policy = "abort"

[origin]
x = 0
y = 40

[render]
radius = 6

[palette]
fallback = "white"

[palette.colors]
"7alt" = "orange"
"" = "#0f0"
"##,
        )
        .unwrap();

        assert_eq!(config.policy, DecodePolicy::Abort);
        assert_eq!(config.origin, Point::new(0, 40));
        assert_eq!(config.render.radius, 6);
        assert_eq!(config.render.width, 450);
        assert_eq!(config.palette.fallback.as_deref(), Some("white"));
        assert_eq!(config.palette.colors.get("7alt").map(String::as_str), Some("orange"));
        assert_eq!(config.palette.colors.get("").map(String::as_str), Some("#0f0"));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(Config::from_toml("policy = \"ignore\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load(Some(Path::new("/nonexistent/changes.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
