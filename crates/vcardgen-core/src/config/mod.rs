use anyhow::Result;
use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Prefix for environment overrides, e.g. `VCARDGEN_LOGGING_LEVEL`.
const ENV_PREFIX: &str = "VCARDGEN";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// vCard version to emit: `"4.0"` or `"3.0"`.
    pub version: String,
}

impl OutputConfig {
    /// ## Summary
    /// Returns whether the configured version selects vCard 3.0 output.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for any version other than
    /// `3.0` or `4.0`.
    pub fn legacy_version(&self) -> CoreResult<bool> {
        match self.version.trim() {
            "3.0" => Ok(true),
            "4.0" => Ok(false),
            other => Err(CoreError::InvalidConfiguration(format!(
                "unsupported output.version {other:?}, expected \"3.0\" or \"4.0\""
            ))),
        }
    }
}

impl Settings {
    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("output.version", "4.0")?)
    }

    /// ## Summary
    /// Loads configuration from defaults, an optional `config.toml` and
    /// `VCARDGEN_*` environment variables. Environment variables take
    /// precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("_")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not match
    /// the settings layout.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
