//! Error types for source fetching
//!
//! These errors stay internal to the resolution pipeline: strategies log
//! them and fall back to the bundled snapshot rather than returning them to
//! callers. They only surface when constructing an HTTP client fails before
//! any resolution has started.

use thiserror::Error;

/// Result alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// A single source fetch gone wrong
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("source {url} returned status {status}")]
	Status { status: u16, url: String },

	#[error("source {url} returned a malformed document: {source}")]
	Parse {
		url: String,
		#[source]
		source: serde_json::Error,
	},
}
