//! Shared HTTP client construction for the network-backed strategies

use std::time::Duration;

use reqwest::{
	header::{HeaderMap, HeaderValue},
	Client,
};
use spl_token_registry_types::{FetchError, FetchResult};

/// Upper bound on any single source request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent sent with every source request
pub const DEFAULT_USER_AGENT: &str = concat!("spl-token-registry/", env!("CARGO_PKG_VERSION"));

/// Options applied to the HTTP client a strategy resolves through
#[derive(Debug, Clone)]
pub struct ClientOptions {
	pub timeout: Duration,
	pub user_agent: String,
}

impl Default for ClientOptions {
	fn default() -> Self {
		Self {
			timeout: DEFAULT_TIMEOUT,
			user_agent: DEFAULT_USER_AGENT.to_string(),
		}
	}
}

/// Build an HTTP client with registry headers and the configured timeout
pub fn build_client(options: &ClientOptions) -> FetchResult<Client> {
	let mut headers = HeaderMap::new();
	headers.insert("Accept", HeaderValue::from_static("application/json"));
	if let Ok(value) = HeaderValue::from_str(&options.user_agent) {
		headers.insert("User-Agent", value);
	}

	let client = Client::builder()
		.default_headers(headers)
		.timeout(options.timeout)
		.build()
		.map_err(FetchError::Http)?;

	Ok(client)
}
