use crate::constants::{DEFAULT_API_URL, DEFAULT_WINDOW_TITLE, ROOT_PATH};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level client configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfigInner {
    pub api: ApiEndpointConfig,
    pub window: WindowConfig,
    pub navigation: NavigationConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(flatten, default)]
    inner: Arc<ClientConfigInner>,
}

impl Deref for ClientConfig {
    type Target = ClientConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<ClientConfigInner> for ClientConfig {
    fn from(inner: ClientConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl DerefMut for ClientConfig {
    fn deref_mut(&mut self) -> &mut ClientConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Base URL of the backing HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiEndpointConfig {
    pub base_url: String,
}

/// Native window settings for the desktop shell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Location the router resolves before the first navigation event.
    pub initial_location: String,
}

/// Logging knobs consumed by the logger builder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Optional `RUST_LOG`-style filter, e.g. `shelf_kernel=debug`.
    pub filter: Option<String>,
    pub console: bool,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for ApiEndpointConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned() }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: DEFAULT_WINDOW_TITLE.to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { initial_location: ROOT_PATH.to_owned() }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, console: true, directory: None, json: false }
    }
}
