use crate::error::Result;
use crate::utils::constants::{ENV_PREFIX, SETTINGS_FILE};
use crate::writers::OutputFormat;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Output defaults for the command line tool.
///
/// Layered from built-in defaults, an optional `fips.toml` and `FIPS_*`
/// environment variables (`FIPS_FORMAT=csv`, `FIPS_HEADER=false`, ...).
/// Command line flags win over all of these.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub format: OutputFormat,
    pub header: bool,
    pub index: bool,
    pub warnings: bool,
    /// County file replacing the bundled table
    #[serde(default)]
    pub counties: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            header: true,
            index: true,
            warnings: true,
            counties: None,
        }
    }
}

impl Settings {
    /// Load from `fips.toml` in the working directory and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .set_default("format", "table")?
            .set_default("header", true)?
            .set_default("index", true)?
            .set_default("warnings", true)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
