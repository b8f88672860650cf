/// Application name
pub const APP_NAME: &str = "Atrium";

/// Application version
pub const APP_VERSION: &str = "0.1.0";

/// Shell API version modules declare compatibility against
pub const SHELL_API_VERSION: &str = "0.1.0";

/// Route path resolved when the configuration does not name one
pub const DEFAULT_ROUTE_PATH: &str = "/";

/// Language key used when the configuration does not name one
pub const DEFAULT_LOCALE: &str = "en";

/// Document title used when the configuration does not name one
pub const DEFAULT_DOCUMENT_TITLE: &str = "Atrium Application";

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "ATRIUM_CONFIG";

/// Configuration file looked up when the environment names none
pub const DEFAULT_CONFIG_FILE: &str = "atrium.toml";
