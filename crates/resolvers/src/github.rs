//! GitHub source strategy

use async_trait::async_trait;
use reqwest::Client;
use spl_token_registry_types::{FetchResult, ResolveStrategy, StrategyId, TokenInfo};

use crate::client::{build_client, ClientOptions};
use crate::fetch::resolve_sources;

/// Raw-file location of the published token list on GitHub
pub const GITHUB_TOKEN_LIST_URL: &str =
	"https://raw.githubusercontent.com/solana-labs/token-list/main/src/tokens/solana.tokenlist.json";

/// Resolves token records from raw files hosted on GitHub
#[derive(Debug)]
pub struct GithubStrategy {
	sources: Vec<String>,
	client: Client,
}

impl GithubStrategy {
	/// Strategy over the default GitHub source
	pub fn new() -> FetchResult<Self> {
		Self::with_sources(
			vec![GITHUB_TOKEN_LIST_URL.to_string()],
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
impl ResolveStrategy for GithubStrategy {
	fn strategy_id(&self) -> StrategyId {
		StrategyId::Github
	}

	async fn resolve(&self) -> Vec<TokenInfo> {
		resolve_sources(&self.client, &self.sources).await
	}
}
