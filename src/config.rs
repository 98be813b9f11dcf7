//! Tool configuration.
//!
//! Every setting has a default matching the blog layout this tool was written
//! for, so the config file is optional. When present, `blog-nest.toml` in the
//! working directory is sparse and overrides only the keys it names:
//!
//! ```toml
//! base_dir = "content/blog"   # Directory holding the flat posts
//! reserved = "_index.md"      # Never moved (the blog section's own index)
//! index_file = "_index.md"    # Name of the generated section indexes
//! redirect_to = "/blog/"      # Where generated sections redirect
//! max_depth = 3               # Filename tokens used as nesting levels (1-3)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::front_matter::DEFAULT_REDIRECT;
use crate::naming::DEFAULT_DEPTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "blog-nest.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NestConfig {
    /// Directory whose flat entries get nested.
    pub base_dir: PathBuf,
    /// Filename in `base_dir` that is never moved or parsed.
    pub reserved: String,
    /// Filename of the placeholder written at each level.
    pub index_file: String,
    /// Redirect target inside the placeholder document.
    pub redirect_to: String,
    /// Number of leading filename tokens used as directory levels.
    pub max_depth: usize,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("content/blog"),
            reserved: "_index.md".to_string(),
            index_file: "_index.md".to_string(),
            redirect_to: DEFAULT_REDIRECT.to_string(),
            max_depth: DEFAULT_DEPTH,
        }
    }
}

impl NestConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=DEFAULT_DEPTH).contains(&self.max_depth) {
            return Err(ConfigError::Validation(format!(
                "max_depth must be 1-{DEFAULT_DEPTH}"
            )));
        }
        if !is_plain_filename(&self.index_file) {
            return Err(ConfigError::Validation(
                "index_file must be a plain filename".into(),
            ));
        }
        if !is_plain_filename(&self.reserved) {
            return Err(ConfigError::Validation(
                "reserved must be a plain filename".into(),
            ));
        }
        Ok(())
    }
}

fn is_plain_filename(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Stock defaults as a TOML table, the base layer for user overrides.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(NestConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value. `Ok(None)` if it does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<NestConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: NestConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults if it is absent.
pub fn load_config(path: &Path) -> Result<NestConfig, ConfigError> {
    resolve_config(load_raw_config(path)?)
}

/// Fully-commented stock config, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# blog-nest configuration
# =======================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory holding the flat, date-prefixed posts.
# Overridden by --source on the command line.
base_dir = "content/blog"

# File in base_dir that is left alone: the blog section's own index.
reserved = "_index.md"

# Name of the placeholder index written at every year/month/day level.
index_file = "_index.md"

# Redirect target written into every placeholder index.
redirect_to = "/blog/"

# How many hyphen-delimited filename tokens become directory levels (1-3).
# 2023-05-01-hello.md -> 2023/05/01/ with the default of 3.
max_depth = 3
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_blog_layout() {
        let config = NestConfig::default();
        assert_eq!(config.base_dir, PathBuf::from("content/blog"));
        assert_eq!(config.reserved, "_index.md");
        assert_eq!(config.index_file, "_index.md");
        assert_eq!(config.redirect_to, "/blog/");
        assert_eq!(config.max_depth, 3);
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, NestConfig::default());
    }

    #[test]
    fn load_config_reads_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "redirect_to = \"/posts/\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.redirect_to, "/posts/");
        // Unspecified defaults preserved
        assert_eq!(config.base_dir, PathBuf::from("content/blog"));
        assert_eq!(config.max_depth, 3);
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "dry_run = true\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "base_dir = [").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn max_depth_out_of_range_rejected() {
        let overlay: toml::Value = toml::from_str("max_depth = 4").unwrap();
        assert!(matches!(
            resolve_config(Some(overlay)),
            Err(ConfigError::Validation(_))
        ));

        let overlay: toml::Value = toml::from_str("max_depth = 0").unwrap();
        assert!(resolve_config(Some(overlay)).is_err());
    }

    #[test]
    fn index_file_with_separator_rejected() {
        let overlay: toml::Value = toml::from_str("index_file = \"a/_index.md\"").unwrap();
        assert!(matches!(
            resolve_config(Some(overlay)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn merge_overlay_wins() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").and_then(|v| v.as_integer()), Some(1));
        assert_eq!(merged.get("b").and_then(|v| v.as_integer()), Some(3));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let overlay: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let config = resolve_config(Some(overlay)).unwrap();
        assert_eq!(config, NestConfig::default());
    }
}
