//! Sheet source errors.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Sheets API returned a non-2xx response.
    #[error("unexpected response from Sheets API: {0}")]
    UnexpectedResponse(String),

    /// The configured API base URL cannot carry a path.
    #[error("invalid Sheets API base url: {0}")]
    InvalidBaseUrl(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two header cells carry the same column name.
    #[error("duplicate column header: {0}")]
    DuplicateHeader(String),

    #[error("failed to parse csv export: {0}")]
    Csv(#[from] ::csv::Error),
}
