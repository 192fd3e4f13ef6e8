//! Mock strategies for examples and testing
//!
//! This module provides simple, working mock strategies that can be used
//! in examples and tests without touching the network.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
	ResolveStrategy, StrategyId, TagDetails, TokenExtensions, TokenInfo, TokenList,
	TokenListVersion,
};

/// Strategy resolving a fixed record sequence
#[derive(Debug, Clone)]
pub struct MockListStrategy {
	pub id: StrategyId,
	pub tokens: Vec<TokenInfo>,
}

impl MockListStrategy {
	/// Mock registered under the given identifier
	pub fn new(id: StrategyId, tokens: Vec<TokenInfo>) -> Self {
		Self { id, tokens }
	}

	/// Mock serving the sample list under the given identifier
	pub fn with_sample_list(id: StrategyId) -> Self {
		Self::new(id, sample_token_list().tokens)
	}
}

#[async_trait]
impl ResolveStrategy for MockListStrategy {
	fn strategy_id(&self) -> StrategyId {
		self.id
	}

	async fn resolve(&self) -> Vec<TokenInfo> {
		self.tokens.clone()
	}
}

/// A small, fully-populated token list document for tests and demos
pub fn sample_token_list() -> TokenList {
	let mut tags = HashMap::new();
	tags.insert(
		"stablecoin".to_string(),
		TagDetails {
			name: "stablecoin".to_string(),
			description: "Tokens that are fixed to an external asset".to_string(),
		},
	);
	tags.insert(
		"wrapped".to_string(),
		TagDetails {
			name: "wrapped".to_string(),
			description: "Asset wrapped from another chain".to_string(),
		},
	);

	TokenList {
		name: "Example Token List".to_string(),
		logo_uri: None,
		keywords: vec!["solana".to_string(), "spl".to_string()],
		tags,
		timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%S%z").to_string(),
		version: Some(TokenListVersion {
			major: 0,
			minor: 1,
			patch: 0,
		}),
		tokens: vec![
			TokenInfo {
				tags: Some(vec!["stablecoin".to_string()]),
				extensions: Some(TokenExtensions {
					website: Some("https://example.org/usdx".to_string()),
					..TokenExtensions::default()
				}),
				..TokenInfo::new(
					101,
					"USDX1111111111111111111111111111111111111111".to_string(),
					"Example Dollar".to_string(),
					"USDX".to_string(),
					6,
				)
			},
			TokenInfo {
				tags: Some(vec!["wrapped".to_string()]),
				..TokenInfo::new(
					101,
					"WBTCX111111111111111111111111111111111111111".to_string(),
					"Example Wrapped BTC".to_string(),
					"WBTCX".to_string(),
					8,
				)
			},
			TokenInfo::new(
				102,
				"TEST1111111111111111111111111111111111111111".to_string(),
				"Testnet Example".to_string(),
				"TEST".to_string(),
				9,
			),
			TokenInfo::new(
				103,
				"DEV11111111111111111111111111111111111111111".to_string(),
				"Devnet Example".to_string(),
				"DEV".to_string(),
				9,
			),
		],
	}
}
