use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::utils::error::StashError;

pub const CONFIG_FILE: &str = ".gstash.toml";

const DEFAULT_DIFF_CONTEXT_SIZE: u32 = 3;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorArg {
    #[default]
    Always,
    Never,
    Auto,
}

impl Display for ColorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ColorArg::Always => "always",
            ColorArg::Never => "never",
            ColorArg::Auto => "auto",
        })
    }
}

/// Read-only settings passed through to the git invocations that need them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct StashConfig {
    /// `--unified` value for patch views
    #[serde(default = "default_diff_context_size")]
    pub diff_context_size: u32,

    /// `--color` value for patch views
    #[serde(default)]
    pub color: ColorArg,
}

fn default_diff_context_size() -> u32 {
    DEFAULT_DIFF_CONTEXT_SIZE
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            diff_context_size: DEFAULT_DIFF_CONTEXT_SIZE,
            color: ColorArg::default(),
        }
    }
}

impl StashConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| StashError::LoadConfigFailed)?;
        let config = toml::from_str(&content).with_context(|| StashError::LoadConfigFailed)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: StashConfig = toml::from_str("").unwrap();
        assert_eq!(config, StashConfig::default());
        assert_eq!(config.color.to_string(), "always");
        assert_eq!(config.diff_context_size, 3);
    }

    #[test]
    fn kebab_case_keys() {
        let config: StashConfig = toml::from_str("diff-context-size = 8\ncolor = \"never\"").unwrap();
        assert_eq!(config.diff_context_size, 8);
        assert_eq!(config.color, ColorArg::Never);
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(toml::from_str::<StashConfig>("color = \"sometimes\"").is_err());
    }
}
