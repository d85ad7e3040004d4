//! Settings for the demonstration binary, read from an optional TOML file
//! with environment overrides. Not part of the validation engine.

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Filter directive handed to the tracing subscriber.
    pub log_filter: String,
    /// Whether to print the store contents after a successful pass.
    pub print_store: bool,
}

impl Settings {
    /// Loads settings from `<path>.toml` (or `stipula.toml` when no path is
    /// given; a missing file is fine) and `STIPULA_*` environment variables.
    pub fn load(path: Option<&str>) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .set_default("log_filter", "info")?
            .set_default("print_store", true)?
            .add_source(File::with_name(path.unwrap_or("stipula")).required(false))
            .add_source(Environment::with_prefix("STIPULA"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
