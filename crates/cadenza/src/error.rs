//! Front-end error taxonomy.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the front-end layers (config, catalog, request queue).
#[derive(Debug, Error)]
pub enum FrontError {
    /// The configured map directory could not be read at all.
    #[error("map directory {path:?} is unreadable")]
    MapDirUnreadable {
        /// The directory that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A request was queued with a timeout the queue cannot honor.
    #[error("invalid request timeout {millis} ms: {reason}")]
    InvalidTimeout {
        /// The rejected timeout value.
        millis: u32,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// The user config file exists but does not parse.
    #[error("config file {path:?} is malformed")]
    ConfigParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The deserializer's diagnostic.
        #[source]
        source: toml::de::Error,
    },
}

/// Convenience alias for front-end results.
pub type FrontResult<T> = Result<T, FrontError>;
