// File: crates/outlook-core/src/error.rs
// Summary: Error type shared by table loading, extraction, configuration checks and rendering.

use std::path::PathBuf;

use thiserror::Error;

pub type OutlookResult<T> = Result<T, OutlookError>;

#[derive(Debug, Error)]
pub enum OutlookError {
    /// The source table could not be opened.
    #[error("input unavailable: {}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column missing from table: {column:?}")]
    MissingColumn { column: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl OutlookError {
    /// Both a missing column and a rejected preset are configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingColumn { .. } | Self::InvalidConfig(_))
    }
}
