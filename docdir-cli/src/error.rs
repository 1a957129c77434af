use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Snapshot file could not be loaded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] docdir_catalog::SnapshotError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// A slug or id that matched no provider
    #[error("Not found: {0}")]
    NotFound(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<docdir_lib::SettingsError> for CliError {
    fn from(e: docdir_lib::SettingsError) -> Self {
        Self::config(e.to_string())
    }
}
