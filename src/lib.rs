//! SPL Token Registry
//!
//! Client-side resolution of the Solana token list. Interchangeable
//! strategies fetch the published list from GitHub, a CDN mirror, or the
//! hosted registry endpoint; a bundled snapshot substitutes for any source
//! that fails, so resolution always yields records. The resolved records
//! arrive in an immutable container with chainable tag, network, and
//! cluster filters.
//!
//! ```no_run
//! use spl_token_registry::{ChainId, TokenListProvider};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = TokenListProvider::new()?;
//! let container = provider.resolve().await?;
//!
//! let stablecoins = container
//! 	.filter_by_chain_id(ChainId::MainnetBeta)
//! 	.filter_by_tag("stablecoin");
//!
//! for token in stablecoins.get_list() {
//! 	println!("{} ({})", token.symbol, token.address);
//! }
//! # Ok(())
//! # }
//! ```

// Core domain types - the most commonly used types
pub use spl_token_registry_types::{
	// External dependencies for convenience
	serde_json,
	// Core types
	ChainId,
	Cluster,
	FetchError,
	FetchResult,
	ResolveStrategy,
	StrategyId,
	TagDetails,
	TokenExtensions,
	TokenInfo,
	TokenList,
	TokenListContainer,
	TokenListVersion,
	UnknownClusterSlug,
	CLUSTER_SLUGS,
};

// Resolver strategies
pub use spl_token_registry_resolvers::{
	build_client, bundled_token_list, CdnStrategy, ClientOptions, GithubStrategy, SolanaStrategy,
	StaticStrategy, StrategyRegistry, CDN_TOKEN_LIST_URL, GITHUB_TOKEN_LIST_URL,
	SOLANA_TOKEN_LIST_URL,
};

// Module aliases for direct access to the member crates
pub mod types {
	pub use spl_token_registry_types::*;
}

pub mod resolvers {
	pub use spl_token_registry_resolvers::*;
}

pub mod mocks;
pub mod provider;
pub mod settings;

pub use provider::{ProviderError, RegistryBuilder, TokenListProvider};
pub use settings::{load_settings, Settings, SourceOverrides};

// Re-export external dependencies for examples
pub use async_trait;
