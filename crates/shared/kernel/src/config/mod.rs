use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default config file stem, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "pclass";

/// Prefix of environment overrides (`PCLASS__PLATFORM__BROWSER__NAME`).
pub const ENV_PREFIX: &str = "PCLASS";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error ({context}): {source}")]
    Config { source: config::ConfigError, context: Cow<'static, str> },
}

/// Adds a context message to config results.
pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: context.into() })
    }
}

/// Loads `T` from a config file overlaid with environment variables.
///
/// 1. **Base File**: `path`, or [`DEFAULT_CONFIG_PATH`] when `None`. The format is
///    inferred from the extension; a bare stem tries each supported extension.
/// 2. **Environment Overrides**: variables prefixed with `PCLASS__`, nested with
///    double underscores (`PCLASS__CLASSES__INCLUDE_DEFAULTS=false` maps to
///    `classes.include_defaults`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the
/// merged sources do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// [`load_config`] reading overrides from `env` instead of the process environment.
///
/// `None` falls back to the process environment. Keys keep their full
/// variable names (`PCLASS__OS__NAME`).
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true).source(env),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
