//! Configuration loading
//!
//! Layers, lowest priority first:
//! 1. `AppConfig::from_env()` presets for `UEZ_ENV`
//! 2. `uez.toml`, then `uez.<environment>.toml`, both optional
//! 3. the file given with `--config`
//! 4. `UEZ__SECTION__KEY` environment variables (e.g. `UEZ__API__BASE_URL`)

use anyhow::{Context, Result};
use config::{Config, Environment as EnvSource, File};
use std::path::Path;
use uez_shared::config::{AppConfig, Environment};

const BASE_FILE: &str = "uez.toml";
const ENV_PREFIX: &str = "UEZ";
const ENV_SEPARATOR: &str = "__";

/// Load `.env`, then build the layered configuration
pub fn load(extra: Option<&Path>) -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();

    build(Path::new("."), extra)
}

/// Build the layered configuration with files resolved against `dir`
pub fn build(dir: &Path, extra: Option<&Path>) -> Result<AppConfig> {
    let presets = AppConfig::from_env();
    let environment = presets.environment;

    let mut builder = Config::builder()
        .add_source(Config::try_from(&presets).context("Failed to serialize default configuration")?)
        .add_source(File::from(dir.join(BASE_FILE)).required(false))
        .add_source(File::from(dir.join(environment.config_file())).required(false));

    if let Some(path) = extra {
        builder = builder.add_source(File::from(path));
    }

    let config = builder
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR),
        )
        .build()
        .context("Failed to load configuration")?;

    config
        .try_deserialize()
        .context("Invalid configuration")
}
