//! Token list document models
//!
//! The external, versioned JSON document shape published by the registry
//! hosts. Only `tokens` is consumed by the core logic; the remaining fields
//! belong to the external contract and are accepted leniently so that any
//! published revision of the document parses without error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::token::TokenInfo;

/// A token list document as published by a registry source
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenList {
	/// Display name of the list
	#[serde(default)]
	pub name: String,
	/// Logo for the list itself
	#[serde(rename = "logoURI", skip_serializing_if = "Option::is_none")]
	pub logo_uri: Option<String>,
	/// Free-form keywords describing the list
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub keywords: Vec<String>,
	/// Dictionary of tag name to tag details, referenced by record tags
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub tags: HashMap<String, TagDetails>,
	/// Publication timestamp, kept verbatim (hosts have published several
	/// offset spellings over time)
	#[serde(default)]
	pub timestamp: String,
	/// Semantic version of the document
	#[serde(skip_serializing_if = "Option::is_none")]
	pub version: Option<TokenListVersion>,
	/// Ordered token records; a missing field reads as an empty sequence
	#[serde(default)]
	pub tokens: Vec<TokenInfo>,
}

/// Details for one entry of the document-level tag dictionary
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TagDetails {
	pub name: String,
	pub description: String,
}

/// Semantic version block of a token list document
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenListVersion {
	pub major: u64,
	pub minor: u64,
	pub patch: u64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_document_parses_with_header_fields() {
		let json = r#"{
			"name": "Solana Token List",
			"logoURI": "https://example.org/logo.png",
			"keywords": ["solana", "spl"],
			"tags": {
				"stablecoin": {
					"name": "stablecoin",
					"description": "Tokens that are fixed to an external asset"
				}
			},
			"timestamp": "2021-03-03T19:41:55+0000",
			"version": { "major": 0, "minor": 2, "patch": 2 },
			"tokens": [
				{
					"chainId": 101,
					"address": "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB",
					"symbol": "USDT",
					"name": "USDT",
					"decimals": 6,
					"tags": ["stablecoin"]
				}
			]
		}"#;

		let list: TokenList = serde_json::from_str(json).unwrap();
		assert_eq!(list.name, "Solana Token List");
		assert_eq!(list.keywords, vec!["solana", "spl"]);
		assert_eq!(list.tags["stablecoin"].name, "stablecoin");
		assert_eq!(list.version, Some(TokenListVersion { major: 0, minor: 2, patch: 2 }));
		assert_eq!(list.tokens.len(), 1);
		assert_eq!(list.tokens[0].symbol, "USDT");
	}

	#[test]
	fn test_missing_tokens_field_reads_empty() {
		let json = r#"{ "name": "Empty List", "timestamp": "2021-01-01T00:00:00+0000" }"#;
		let list: TokenList = serde_json::from_str(json).unwrap();
		assert!(list.tokens.is_empty());
	}

	#[test]
	fn test_unknown_document_fields_ignored() {
		let json = r#"{
			"name": "List",
			"tokens": [],
			"futureTopLevelField": { "anything": true }
		}"#;
		let list: TokenList = serde_json::from_str(json).unwrap();
		assert_eq!(list.name, "List");
	}
}
