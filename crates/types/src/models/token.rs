//! Token metadata record models

use serde::{Deserialize, Serialize};

/// One token's metadata entry in a token list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
	/// Numeric network identifier the token lives on (101 mainnet-beta,
	/// 102 testnet, 103 devnet; unknown codes are passed through untouched)
	pub chain_id: u64,
	/// Base58-encoded mint address
	pub address: String,
	/// Human-readable name (e.g., "USD Coin")
	pub name: String,
	/// Number of decimal places
	pub decimals: u8,
	/// Token symbol (e.g., "USDC", "RAY")
	pub symbol: String,
	/// Logo location, when the list publishes one
	#[serde(rename = "logoURI", skip_serializing_if = "Option::is_none")]
	pub logo_uri: Option<String>,
	/// Labels from the list's tag dictionary; absent means untagged
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tags: Option<Vec<String>>,
	/// Optional open-ended metadata block
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extensions: Option<TokenExtensions>,
}

impl TokenInfo {
	pub fn new(
		chain_id: u64,
		address: String,
		name: String,
		symbol: String,
		decimals: u8,
	) -> Self {
		Self {
			chain_id,
			address,
			name,
			decimals,
			symbol,
			logo_uri: None,
			tags: None,
			extensions: None,
		}
	}

	/// Whether this record carries the given tag. Records without a tag
	/// set never match.
	pub fn has_tag(&self, tag: &str) -> bool {
		self.tags
			.as_deref()
			.unwrap_or_default()
			.iter()
			.any(|t| t == tag)
	}
}

/// Optional per-token extension block
///
/// Every field is optional and none of them are validated; unknown keys in
/// source documents are ignored on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TokenExtensions {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub website: Option<String>,
	/// Bridge contract on the origin chain, for bridged assets
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bridge_contract: Option<String>,
	/// Asset contract on the origin chain, for bridged assets
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset_contract: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub explorer: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub twitter: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub github: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub medium: Option<String>,
	/// Telegram announcement channel
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tgann: Option<String>,
	/// Telegram group
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tggroup: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub discord: Option<String>,
	/// Serum v3 market address quoted in USDT
	#[serde(skip_serializing_if = "Option::is_none")]
	pub serum_v3_usdt: Option<String>,
	/// Serum v3 market address quoted in USDC
	#[serde(skip_serializing_if = "Option::is_none")]
	pub serum_v3_usdc: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub coingecko_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}
