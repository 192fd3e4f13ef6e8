//! Token list document fixtures for integration tests

use spl_token_registry::serde_json::{json, Value};

/// Documents the fixture server hosts
#[allow(dead_code)]
pub struct ListFixtures;

#[allow(dead_code)]
impl ListFixtures {
	/// The main hosted document: four records across all three clusters
	pub fn hosted_document() -> Value {
		json!({
			"name": "Hosted Test List",
			"keywords": ["solana", "spl"],
			"tags": {
				"stablecoin": {
					"name": "stablecoin",
					"description": "Tokens that are fixed to an external asset"
				},
				"wrapped": {
					"name": "wrapped",
					"description": "Asset wrapped from another chain"
				}
			},
			"timestamp": "2021-06-01T00:00:00+0000",
			"version": { "major": 1, "minor": 0, "patch": 0 },
			"tokens": [
				{
					"chainId": 101,
					"address": "HUSDhost111111111111111111111111111111111111",
					"symbol": "HUSD",
					"name": "Hosted Dollar",
					"decimals": 6,
					"tags": ["stablecoin"]
				},
				{
					"chainId": 101,
					"address": "HWRAPhost11111111111111111111111111111111111",
					"symbol": "HWRAP",
					"name": "Hosted Wrapped",
					"decimals": 8,
					"tags": ["wrapped"]
				},
				{
					"chainId": 102,
					"address": "HTESThost11111111111111111111111111111111111",
					"symbol": "HTEST",
					"name": "Hosted Testnet Token",
					"decimals": 9
				},
				{
					"chainId": 103,
					"address": "HDEVhost1111111111111111111111111111111111111",
					"symbol": "HDEV",
					"name": "Hosted Devnet Dollar",
					"decimals": 6,
					"tags": ["stablecoin"]
				}
			]
		})
	}

	/// Addresses of [`Self::hosted_document`] records, in document order
	pub fn hosted_addresses() -> Vec<&'static str> {
		vec![
			"HUSDhost111111111111111111111111111111111111",
			"HWRAPhost11111111111111111111111111111111111",
			"HTESThost11111111111111111111111111111111111",
			"HDEVhost1111111111111111111111111111111111111",
		]
	}

	/// A second document with two distinct records
	pub fn alternate_document() -> Value {
		json!({
			"name": "Alternate Test List",
			"timestamp": "2021-06-02T00:00:00+0000",
			"version": { "major": 1, "minor": 0, "patch": 1 },
			"tokens": [
				{
					"chainId": 101,
					"address": "ALTAalt1111111111111111111111111111111111111",
					"symbol": "ALTA",
					"name": "Alternate A",
					"decimals": 6
				},
				{
					"chainId": 103,
					"address": "ALTBalt1111111111111111111111111111111111111",
					"symbol": "ALTB",
					"name": "Alternate B",
					"decimals": 9
				}
			]
		})
	}

	/// A valid document without a tokens field
	pub fn bare_document() -> Value {
		json!({
			"name": "Bare Test List",
			"timestamp": "2021-06-03T00:00:00+0000"
		})
	}
}
