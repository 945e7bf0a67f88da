/// Path every client starts on unless configured otherwise.
pub const ROOT_PATH: &str = "/";

/// Environment prefix for configuration overrides (`SHELF__API__BASE_URL`).
pub const ENV_PREFIX: &str = "SHELF";

/// Separator between nested configuration keys in environment variables.
pub const ENV_SEPARATOR: &str = "__";

/// Default configuration file stem, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "shelf";

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_WINDOW_TITLE: &str = "Shelf";
