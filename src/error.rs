//! Error types for the Spotify and YouTube clients.
//!
//! Library components return these instead of terminating the process. The
//! command layer decides which of them are fatal.

use std::{io, net::SocketAddr, path::PathBuf};

use thiserror::Error;

/// Failures of the Spotify fetcher and paginator.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Every attempt for this page failed. No partial page is returned.
    #[error("couldn't load URL {url} after {attempts} attempts ({reason})")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        reason: String,
    },

    /// The response was JSON but not the expected shape, e.g. a page envelope
    /// without `items`, `total` or `next`.
    #[error("unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl FetchError {
    pub fn is_retries_exhausted(&self) -> bool {
        matches!(self, FetchError::RetriesExhausted { .. })
    }
}

/// Failures of the token cache file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("token cache I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("token cache is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failures of an interactive authorization attempt.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("failed to bind callback listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("callback listener failed: {0}")]
    Serve(#[from] io::Error),

    #[error("no access_token in callback query: {query:?}")]
    MissingToken { query: String },

    #[error("authorization was denied: {0}")]
    Denied(String),

    #[error("token exchange failed: {0}")]
    Exchange(String),

    #[error("invalid client secrets file {path}: {reason}")]
    ClientSecrets { path: PathBuf, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures of the YouTube Data API client.
#[derive(Error, Debug)]
pub enum YoutubeError {
    #[error("YouTube request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}
