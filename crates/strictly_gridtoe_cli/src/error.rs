//! Errors raised while reading or writing the data directory.

use derive_more::{Display, Error};
use tracing::instrument;

/// A settings or scores file could not be read, decoded, or written.
///
/// Records where in the shell the failure was raised so a bad save can be
/// traced from the log line alone.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// What went wrong, including the underlying cause.
    pub message: String,
    /// Line of the store call that failed.
    pub line: u32,
    /// File of the store call that failed.
    pub file: &'static str,
}

impl StoreError {
    /// Wraps `message`, tagging it with the calling store operation.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("data directory I/O failed: {}", err))
    }
}

impl From<toml::ser::Error> for StoreError {
    #[track_caller]
    fn from(err: toml::ser::Error) -> Self {
        Self::new(format!("settings could not be encoded: {}", err))
    }
}

impl From<toml::de::Error> for StoreError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("settings.toml is malformed: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("scores.json is malformed: {}", err))
    }
}

impl From<strictly_gridtoe::GameError> for StoreError {
    #[track_caller]
    fn from(err: strictly_gridtoe::GameError) -> Self {
        Self::new(format!("stored settings rejected: {}", err))
    }
}
