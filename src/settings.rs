//! Configuration settings structures

use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use spl_token_registry_resolvers::{ClientOptions, DEFAULT_USER_AGENT};

/// Main registry settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	/// Upper bound on any single source request, in milliseconds
	pub request_timeout_ms: u64,
	/// User agent sent with every source request
	pub user_agent: String,
	/// Per-strategy source URL overrides
	pub sources: SourceOverrides,
}

/// Source URL overrides, keyed by strategy. A strategy without an override
/// resolves its default source.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SourceOverrides {
	pub github: Option<Vec<String>>,
	pub cdn: Option<Vec<String>>,
	pub solana: Option<Vec<String>>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			request_timeout_ms: 10_000,
			user_agent: DEFAULT_USER_AGENT.to_string(),
			sources: SourceOverrides::default(),
		}
	}
}

impl Settings {
	/// Client options derived from these settings
	pub fn client_options(&self) -> ClientOptions {
		ClientOptions {
			timeout: Duration::from_millis(self.request_timeout_ms),
			user_agent: self.user_agent.clone(),
		}
	}
}

/// Load configuration from config file
pub fn load_settings() -> Result<Settings, ConfigError> {
	// Load only the default configuration file
	let s = Config::builder()
		.add_source(File::with_name("config/registry").required(false))
		.build()?;

	s.try_deserialize()
}
