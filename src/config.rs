//! Runtime configuration.
//!
//! Loaded from `devhandler.toml` in the working directory when present.
//! Every field has a default, so an empty (or missing) file reproduces the
//! stock behaviour: plain text lines on stdout and `warn`-level diagnostics.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [output]
//! format = "json"
//! device_id = "input:0"
//! ```

use crate::backends::virtual_input::DEFAULT_DEVICE_ID;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`Config::load_default`].
pub const CONFIG_FILE: &str = "devhandler.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub device_id: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            device_id: DEFAULT_DEVICE_ID.to_string(),
        }
    }
}

/// How [`ConsoleLogger`](crate::logger::ConsoleLogger) renders events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl Config {
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `./devhandler.toml` if it exists, defaults otherwise.
    pub fn load_default() -> Result<Self> {
        Self::load_or_default(Path::new(CONFIG_FILE))
    }

    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
