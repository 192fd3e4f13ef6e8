//! Registry of resolution strategies

use std::collections::HashMap;

use spl_token_registry_types::{FetchResult, ResolveStrategy, StrategyId};

use crate::{CdnStrategy, GithubStrategy, SolanaStrategy, StaticStrategy};

/// Holds the resolution strategies available to a provider, keyed by
/// identifier
#[derive(Debug, Default)]
pub struct StrategyRegistry {
	strategies: HashMap<StrategyId, Box<dyn ResolveStrategy>>,
}

impl StrategyRegistry {
	pub fn new() -> Self {
		Self {
			strategies: HashMap::new(),
		}
	}

	/// Registry pre-loaded with every built-in strategy over its default
	/// sources
	pub fn with_defaults() -> FetchResult<Self> {
		let mut registry = Self::new();
		registry.register(Box::new(GithubStrategy::new()?));
		registry.register(Box::new(StaticStrategy::new()));
		registry.register(Box::new(SolanaStrategy::new()?));
		registry.register(Box::new(CdnStrategy::new()?));
		Ok(registry)
	}

	/// Insert a strategy under its own identifier, replacing any previous
	/// entry for that identifier
	pub fn register(&mut self, strategy: Box<dyn ResolveStrategy>) {
		self.strategies.insert(strategy.strategy_id(), strategy);
	}

	pub fn get(&self, id: StrategyId) -> Option<&dyn ResolveStrategy> {
		self.strategies.get(&id).map(|strategy| strategy.as_ref())
	}

	/// Identifiers currently registered, in no particular order
	pub fn ids(&self) -> Vec<StrategyId> {
		self.strategies.keys().copied().collect()
	}

	pub fn len(&self) -> usize {
		self.strategies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.strategies.is_empty()
	}
}
