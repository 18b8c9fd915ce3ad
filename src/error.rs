// SPDX-License-Identifier: MPL-2.0
//! Errors from reading and writing the settings and intro script files.
//!
//! The sequencer, the carousel and the chat boundary have their own error
//! enums. None of these errors stop the application: callers fall back to
//! defaults and show the [`Error::warning_key`] banner.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    /// `settings.toml` did not parse or could not be serialized.
    #[error("invalid settings: {0}")]
    Config(String),

    /// An intro script file parsed as TOML but holds no usable stages.
    #[error("invalid intro script: {0}")]
    Script(String),
}

impl Error {
    /// Fluent key of the banner shown when loading falls back to defaults.
    #[must_use]
    pub fn warning_key(&self) -> &'static str {
        match self {
            Error::Script(_) => "notification-script-load-error",
            Error::Io(_) | Error::Config(_) => "notification-config-load-error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.message().to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
