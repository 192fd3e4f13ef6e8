//! CDN source strategy

use async_trait::async_trait;
use reqwest::Client;
use spl_token_registry_types::{FetchResult, ResolveStrategy, StrategyId, TokenInfo};

use crate::client::{build_client, ClientOptions};
use crate::fetch::resolve_sources;

/// CDN mirror of the GitHub-hosted token list. Preferred default: the CDN
/// caches aggressively and stays reachable when raw GitHub traffic is
/// throttled.
pub const CDN_TOKEN_LIST_URL: &str =
	"https://cdn.jsdelivr.net/gh/solana-labs/token-list@latest/src/tokens/solana.tokenlist.json";

/// Resolves token records from a CDN mirror
#[derive(Debug)]
pub struct CdnStrategy {
	sources: Vec<String>,
	client: Client,
}

impl CdnStrategy {
	/// Strategy over the default CDN mirror
	pub fn new() -> FetchResult<Self> {
		Self::with_sources(
			vec![CDN_TOKEN_LIST_URL.to_string()],
			&ClientOptions::default(),
		)
	}

	/// Strategy over custom source URLs with the given client options
	pub fn with_sources(sources: Vec<String>, options: &ClientOptions) -> FetchResult<Self> {
		Ok(Self {
			sources,
			client: build_client(options)?,
		})
	}

	/// The source URLs this strategy resolves
	pub fn sources(&self) -> &[String] {
		&self.sources
	}
}

#[async_trait]
impl ResolveStrategy for CdnStrategy {
	fn strategy_id(&self) -> StrategyId {
		StrategyId::Cdn
	}

	async fn resolve(&self) -> Vec<TokenInfo> {
		resolve_sources(&self.client, &self.sources).await
	}
}
