//! Configuration file support for the luopan tools.
//!
//! Settings live in `luopan.toml`. Every key is optional:
//!
//! ```toml
//! [chart]
//! align_to_heading = false
//!
//! [tai_sui]
//! lookback_years = 90
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use luopan_base::{BirthYearConfig, DEFAULT_LOOKBACK_YEARS};
use serde::Deserialize;

/// Paths tried, in order, when no explicit config path is given.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["luopan.toml", "config/luopan.toml"];

/// Validated settings consumed by the CLI and other front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuopanSettings {
    /// Rotate the annual grid so the faced bearing is drawn on top.
    pub align_to_heading: bool,
    /// Window for birth-year enumeration.
    pub birth_years: BirthYearConfig,
}

impl Default for LuopanSettings {
    fn default() -> Self {
        Self {
            align_to_heading: false,
            birth_years: BirthYearConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    align_to_heading: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct TaiSuiToml {
    #[serde(default = "default_lookback_years")]
    lookback_years: u32,
}

impl Default for TaiSuiToml {
    fn default() -> Self {
        Self {
            lookback_years: default_lookback_years(),
        }
    }
}

fn default_lookback_years() -> u32 {
    DEFAULT_LOOKBACK_YEARS
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    chart: ChartToml,
    #[serde(default)]
    tai_sui: TaiSuiToml,
}

/// Parse and validate settings from TOML text.
pub fn parse_settings(text: &str) -> anyhow::Result<LuopanSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse luopan config: {e}"))?;
    let birth_years = BirthYearConfig::new(root.tai_sui.lookback_years);
    birth_years
        .validate()
        .context("invalid [tai_sui] section")?;
    Ok(LuopanSettings {
        align_to_heading: root.chart.align_to_heading,
        birth_years,
    })
}

/// Load settings from an explicit file.
pub fn load_settings_from(path: &Path) -> anyhow::Result<LuopanSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("in {}", path.display()))
}

/// First existing file among [`DEFAULT_CONFIG_PATHS`].
pub fn find_config_file() -> Option<PathBuf> {
    DEFAULT_CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Load settings from `path`, or from the default locations, or fall back
/// to built-in defaults when no file exists.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<LuopanSettings> {
    if let Some(p) = path {
        return load_settings_from(p);
    }
    match find_config_file() {
        Some(p) => {
            log::debug!("using config file {}", p.display());
            load_settings_from(&p)
        }
        None => {
            log::debug!("no config file found in {DEFAULT_CONFIG_PATHS:?}; using defaults");
            Ok(LuopanSettings::default())
        }
    }
}
