//! Error types for academy-md.
//!
//! This module defines the error types returned by fetching and export
//! operations. Image download failures are deliberately absent: they are
//! non-fatal and surface as warnings instead (see [`crate::images`]).

use std::io;
use std::path::PathBuf;

/// Error type for module fetching and export operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The authentication probe returned a non-200 status.
    #[error("authentication failed (HTTP {0}); refresh your cookies and try again")]
    AuthenticationFailed(u16),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A request failed at the transport level.
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The URL does not point at a module index page.
    #[error("not a module URL: {0}")]
    InvalidModuleUrl(String),

    /// The module index page carried no usable `<title>` element.
    #[error("no title found on module index page {0}")]
    TitleNotFound(String),

    /// The module index page linked to no lesson pages.
    #[error("no lesson pages found on module index page {0}")]
    NoLessonPages(String),

    /// A lesson page did not contain the expected content marker.
    /// Carries the raw page text so the operator can see what came back.
    #[error("cannot find lesson content in page {url}\npage:\n{page}")]
    ContentNotFound { url: String, page: String },

    /// The local image directory could not be prepared.
    #[error("cannot prepare image directory {path}: {source}")]
    ImageDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing an output file failed.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for module fetching and export operations.
pub type Result<T> = std::result::Result<T, Error>;
