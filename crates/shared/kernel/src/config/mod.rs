use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use shelf_domain::config::{ClientConfig, ClientConfigInner};
use shelf_domain::constants::{CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Custom error type for config loading.
#[shelf_derive::shelf_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader.
///
/// 1. **Base File**: settings from `path` (any extension the `config` crate knows, e.g.
///    `shelf.toml`). Defaults to `shelf` in the working directory. The file is optional:
///    a missing file leaves every field at its default.
/// 2. **Environment Overrides**: variables prefixed with `SHELF__`, nested with double
///    underscores (`SHELF__API__BASE_URL` maps to `api.base_url`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is malformed or a value does not fit `T`.
///
/// # Example
/// ```rust
/// use shelf_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Window {
///     width: f64,
/// }
///
/// let window: Window = load_config(Some("config/window".as_ref())).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<&Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = config_path(path);

    debug!("Loading config from {}", path.display());

    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// File the loader reads: `path`, or `shelf` in the working directory.
#[must_use]
pub fn config_path(path: Option<&Path>) -> &Path {
    path.unwrap_or_else(|| Path::new(CONFIG_FILE))
}

/// Loads the client configuration (see [`load_config`]).
///
/// # Errors
/// Same as [`load_config`].
pub fn load_client_config(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    load_config::<ClientConfigInner>(path).map(ClientConfig::from)
}
