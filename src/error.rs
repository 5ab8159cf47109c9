use std::path::PathBuf;
use thiserror::Error;

/// Errors from the fallible edges of the crate: config loading and logging setup.
///
/// Device and manager operations never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read config {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
