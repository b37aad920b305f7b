//! Optional `protods.toml` project configuration.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::Deserialize;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "protods.toml";

/// Root of `protods.toml`.
///
/// ```toml
/// [generate]
/// output = "gen"
/// format = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Settings for `protods generate`.
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// The `[generate]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Directory generated files are written to.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Run the generator's formatter over the output.
    #[serde(default = "default_format")]
    pub format: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}

fn default_format() -> bool {
    true
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        content
            .parse()
            .wrap_err_with(|| format!("failed to parse '{}'", path.display()))
    }
}

impl std::str::FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
