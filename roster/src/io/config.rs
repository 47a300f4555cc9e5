//! Session configuration read from an optional TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::validate::FieldLimits;

/// Roster configuration (TOML).
///
/// Every field is optional in the file; missing fields keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RosterConfig {
    /// Text printed before each interactive command line.
    pub prompt: String,

    /// Ask for `y/n` confirmation before `clear` in interactive mode.
    pub confirm_clear: bool,

    pub limits: FieldLimits,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".to_string(),
            confirm_clear: true,
            limits: FieldLimits::default(),
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_height == 0 {
            return Err(anyhow!("limits.max_height must be > 0"));
        }
        if self.limits.passport_digits == 0 {
            return Err(anyhow!("limits.passport_digits must be > 0"));
        }
        if self.limits.max_coordinate_x <= self.limits.min_coordinate_y {
            return Err(anyhow!(
                "limits.max_coordinate_x must be greater than limits.min_coordinate_y"
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If `path` is `None` or the file is missing, returns `RosterConfig::default()`.
pub fn load_config(path: Option<&Path>) -> Result<RosterConfig> {
    let Some(path) = path.filter(|path| path.exists()) else {
        let cfg = RosterConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    };
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RosterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RosterConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
