//! Error taxonomy for adhancast.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AdhanError>;

/// Every fatal condition the tool can hit. `Fetch` maps to exit code 1,
/// everything else to exit code 2.
#[derive(Debug, Error)]
pub enum AdhanError {
    /// Config file unreadable or unparseable.
    #[error("Config error: {0}")]
    Config(String),

    /// Transport or HTTP failure while fetching prayer times.
    #[error("Error fetching prayer times: {0}")]
    Fetch(String),

    /// A provider time value that is not a valid "H:MM" clock string.
    #[error("Invalid prayer time '{0}': expected H:MM")]
    InvalidTime(String),

    /// Reading or writing the host crontab failed.
    #[error("Crontab error: {0}")]
    Crontab(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
