//! Bundled snapshot strategy
//!
//! The crate ships a point-in-time copy of the published token list. It
//! backs the `static` strategy directly and doubles as the substitute every
//! network strategy falls back on when a source fails.

use async_trait::async_trait;
use lazy_static::lazy_static;
use spl_token_registry_types::{ResolveStrategy, StrategyId, TokenInfo, TokenList};

const BUNDLED_LIST_JSON: &str = include_str!("solana.tokenlist.json");

lazy_static! {
	static ref BUNDLED_LIST: TokenList =
		serde_json::from_str(BUNDLED_LIST_JSON).expect("bundled token list must parse");
}

/// The bundled snapshot, parsed once on first use
pub fn bundled_token_list() -> &'static TokenList {
	&BUNDLED_LIST
}

/// Serves the bundled snapshot without touching the network
#[derive(Debug, Default)]
pub struct StaticStrategy;

impl StaticStrategy {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl ResolveStrategy for StaticStrategy {
	fn strategy_id(&self) -> StrategyId {
		StrategyId::Static
	}

	async fn resolve(&self) -> Vec<TokenInfo> {
		bundled_token_list().tokens.clone()
	}
}
