//! Hosted registry source strategy

use async_trait::async_trait;
use reqwest::Client;
use spl_token_registry_types::{FetchResult, ResolveStrategy, StrategyId, TokenInfo};

use crate::client::{build_client, ClientOptions};
use crate::fetch::resolve_sources;

/// The registry's own hosted copy of the token list
pub const SOLANA_TOKEN_LIST_URL: &str = "https://token-list.solana.com/solana.tokenlist.json";

/// Resolves token records from the registry's hosted endpoint
#[derive(Debug)]
pub struct SolanaStrategy {
	sources: Vec<String>,
	client: Client,
}

impl SolanaStrategy {
	/// Strategy over the default hosted endpoint
	pub fn new() -> FetchResult<Self> {
		Self::with_sources(
			vec![SOLANA_TOKEN_LIST_URL.to_string()],
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
impl ResolveStrategy for SolanaStrategy {
	fn strategy_id(&self) -> StrategyId {
		StrategyId::Solana
	}

	async fn resolve(&self) -> Vec<TokenInfo> {
		resolve_sources(&self.client, &self.sources).await
	}
}
