//! Token list provider and builder
//!
//! The provider owns a strategy registry and turns one chosen strategy's
//! records into a filterable container. Strategy selection and construction
//! can fail; resolution itself cannot, because every strategy degrades to
//! the bundled snapshot on source failure.

use spl_token_registry_resolvers::{
	CdnStrategy, GithubStrategy, SolanaStrategy, StaticStrategy, StrategyRegistry,
	CDN_TOKEN_LIST_URL, GITHUB_TOKEN_LIST_URL, SOLANA_TOKEN_LIST_URL,
};
use spl_token_registry_types::{FetchError, ResolveStrategy, StrategyId, TokenListContainer};
use thiserror::Error;
use tracing::{debug, info};

use crate::settings::{load_settings, Settings};

/// Errors raised while constructing or selecting strategies
#[derive(Debug, Error)]
pub enum ProviderError {
	#[error("strategy {id} is not registered")]
	StrategyNotRegistered { id: StrategyId },

	#[error("failed to initialize strategies: {0}")]
	Initialization(#[from] FetchError),
}

/// Resolves the token list through a chosen strategy
#[derive(Debug)]
pub struct TokenListProvider {
	registry: StrategyRegistry,
}

impl TokenListProvider {
	/// Provider over every built-in strategy with default sources
	pub fn new() -> Result<Self, ProviderError> {
		Ok(Self {
			registry: StrategyRegistry::with_defaults()?,
		})
	}

	/// Provider over a custom strategy registry
	pub fn with_registry(registry: StrategyRegistry) -> Self {
		Self { registry }
	}

	/// Identifiers of the registered strategies
	pub fn strategy_ids(&self) -> Vec<StrategyId> {
		self.registry.ids()
	}

	/// Resolve through the default strategy
	pub async fn resolve(&self) -> Result<TokenListContainer, ProviderError> {
		self.resolve_with(StrategyId::Cdn).await
	}

	/// Resolve through the given strategy into a filterable container
	pub async fn resolve_with(&self, id: StrategyId) -> Result<TokenListContainer, ProviderError> {
		let strategy = self
			.registry
			.get(id)
			.ok_or(ProviderError::StrategyNotRegistered { id })?;

		debug!("Resolving token list via {} strategy", id);
		let tokens = strategy.resolve().await;
		info!("Resolved {} token records via {} strategy", tokens.len(), id);

		Ok(TokenListContainer::new(tokens))
	}
}

/// Builder pattern for configuring the provider
///
/// Built-in strategies are constructed over the configured sources first;
/// custom strategies registered through [`with_strategy`] land on top and
/// replace any built-in sharing their identifier.
///
/// [`with_strategy`]: RegistryBuilder::with_strategy
pub struct RegistryBuilder {
	settings: Option<Settings>,
	strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl Default for RegistryBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self {
			settings: None,
			strategies: Vec::new(),
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Register a custom strategy
	pub fn with_strategy(mut self, strategy: Box<dyn ResolveStrategy>) -> Self {
		self.strategies.push(strategy);
		self
	}

	/// Build the provider
	pub fn build(self) -> Result<TokenListProvider, ProviderError> {
		// Use provided settings or load from config with defaults
		let settings = match self.settings {
			Some(settings) => settings,
			None => load_settings().unwrap_or_default(),
		};
		let options = settings.client_options();

		let mut registry = StrategyRegistry::new();
		registry.register(Box::new(GithubStrategy::with_sources(
			settings
				.sources
				.github
				.clone()
				.unwrap_or_else(|| vec![GITHUB_TOKEN_LIST_URL.to_string()]),
			&options,
		)?));
		registry.register(Box::new(StaticStrategy::new()));
		registry.register(Box::new(SolanaStrategy::with_sources(
			settings
				.sources
				.solana
				.clone()
				.unwrap_or_else(|| vec![SOLANA_TOKEN_LIST_URL.to_string()]),
			&options,
		)?));
		registry.register(Box::new(CdnStrategy::with_sources(
			settings
				.sources
				.cdn
				.clone()
				.unwrap_or_else(|| vec![CDN_TOKEN_LIST_URL.to_string()]),
			&options,
		)?));

		for strategy in self.strategies {
			registry.register(strategy);
		}

		info!(
			"Provider initialized with {} strategy(ies)",
			registry.len()
		);

		Ok(TokenListProvider::with_registry(registry))
	}
}
