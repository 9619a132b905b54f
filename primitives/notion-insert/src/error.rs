//! Error types for reading input and creating pages.

use std::path::PathBuf;

/// Fatal errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be opened.
    #[error("failed to open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the input file failed part way through.
    #[error("failed to scan")]
    Scan(#[source] std::io::Error),

    /// Creating the page for a line failed.
    #[error("failed to create page {title}")]
    CreatePage {
        title: String,
        #[source]
        source: SubmitError,
    },
}

/// Errors from a single page-creation request.
///
/// A non-2xx response is not represented here; it is logged and returned as a status.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("failed to generate JSON")]
    Json(#[source] serde_json::Error),

    #[error("failed to generate request")]
    Build(#[source] reqwest::Error),

    #[error("failed to send request")]
    Send(#[source] reqwest::Error),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Build(err)
        } else {
            Self::Send(err)
        }
    }
}
