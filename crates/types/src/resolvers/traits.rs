//! Resolution strategy trait and identifiers

use crate::models::TokenInfo;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one interchangeable resolution strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyId {
	/// Raw file hosted on GitHub
	Github,
	/// Bundled snapshot, no network involved
	Static,
	/// Registry's own hosted endpoint
	Solana,
	/// CDN mirror of the GitHub file
	Cdn,
}

impl fmt::Display for StrategyId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			StrategyId::Github => "github",
			StrategyId::Static => "static",
			StrategyId::Solana => "solana",
			StrategyId::Cdn => "cdn",
		};
		write!(f, "{}", name)
	}
}

/// A source of token records.
///
/// Implementations resolve their configured sources and return whatever
/// records they can. Resolution never fails from the caller's point of view:
/// a strategy absorbs per-source errors and substitutes fallback records
/// instead of surfacing them.
#[async_trait]
pub trait ResolveStrategy: Send + Sync + fmt::Debug {
	/// The identifier this strategy registers under
	fn strategy_id(&self) -> StrategyId;

	/// Resolve all configured sources into one ordered record sequence
	async fn resolve(&self) -> Vec<TokenInfo>;
}
