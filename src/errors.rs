//! Application error types.
//! `AppError` covers failures outside the fetch loop (terminal I/O, client
//! construction); `FetchError` is the classified per-request failure the
//! pagination loop retries on.

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO (prompt / console)
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // HTTP client setup
    // ---------------------------
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// One failed page request, classified. Every variant is transient as far
/// as the retry policy is concerned; the distinction only matters for the
/// message shown to the user.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("server returned HTTP {status}")]
    Status { status: StatusCode },

    #[error("connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl FetchError {
    /// Sort a transport-level `reqwest` error into the taxonomy above.
    /// Timeout wins over connection because `reqwest` can flag both on one
    /// error. Non-2xx statuses never reach here; the fetcher turns those
    /// into [`FetchError::Status`] directly.
    pub fn classify(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else if err.is_connect() {
            FetchError::Connection(err)
        } else {
            FetchError::Request(err)
        }
    }
}
