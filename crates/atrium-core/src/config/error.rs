use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or parsing application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a supported format.
    #[error("unsupported config format for '{path}'")]
    UnsupportedFormat { path: PathBuf },

    /// The file content did not parse in the format its extension promised.
    #[error("failed to parse {format} config: {message}")]
    Parse { format: &'static str, message: String },
}
