//! SPL Token Registry Resolvers
//!
//! Source-specific resolution strategies for the SPL token registry. Each
//! strategy resolves the published token list from its own class of host;
//! the static strategy serves the bundled snapshot, which also substitutes
//! for any network source that fails.

pub mod cdn;
pub mod client;
pub mod github;
pub mod registry;
pub mod solana;
pub mod static_list;

mod fetch;

pub use cdn::{CdnStrategy, CDN_TOKEN_LIST_URL};
pub use client::{build_client, ClientOptions, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use github::{GithubStrategy, GITHUB_TOKEN_LIST_URL};
pub use registry::StrategyRegistry;
pub use solana::{SolanaStrategy, SOLANA_TOKEN_LIST_URL};
pub use spl_token_registry_types::{FetchError, FetchResult, ResolveStrategy, StrategyId};
pub use static_list::{bundled_token_list, StaticStrategy};
