//! Network identifier and cluster models

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Recognized cluster slugs, in the order they are reported to callers
pub const CLUSTER_SLUGS: [&str; 3] = ["mainnet-beta", "testnet", "devnet"];

/// Numeric network identifiers used by token list records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainId {
	MainnetBeta = 101,
	Testnet = 102,
	Devnet = 103,
}

impl ChainId {
	/// Look up the enumerated identifier for a raw network code
	pub fn from_id(id: u64) -> Option<Self> {
		match id {
			101 => Some(Self::MainnetBeta),
			102 => Some(Self::Testnet),
			103 => Some(Self::Devnet),
			_ => None,
		}
	}
}

impl From<ChainId> for u64 {
	fn from(chain_id: ChainId) -> Self {
		chain_id as u64
	}
}

/// Human-readable alias for a network identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
	MainnetBeta,
	Testnet,
	Devnet,
}

impl Cluster {
	pub fn slug(&self) -> &'static str {
		match self {
			Self::MainnetBeta => "mainnet-beta",
			Self::Testnet => "testnet",
			Self::Devnet => "devnet",
		}
	}

	pub fn chain_id(&self) -> ChainId {
		match self {
			Self::MainnetBeta => ChainId::MainnetBeta,
			Self::Testnet => ChainId::Testnet,
			Self::Devnet => ChainId::Devnet,
		}
	}
}

impl FromStr for Cluster {
	type Err = UnknownClusterSlug;

	fn from_str(slug: &str) -> Result<Self, Self::Err> {
		match slug {
			"mainnet-beta" => Ok(Self::MainnetBeta),
			"testnet" => Ok(Self::Testnet),
			"devnet" => Ok(Self::Devnet),
			_ => Err(UnknownClusterSlug {
				slug: slug.to_string(),
			}),
		}
	}
}

impl fmt::Display for Cluster {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.slug())
	}
}

/// The one caller-facing validation error of the crate: a cluster slug
/// outside the recognized set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown cluster slug: {slug}, please use one of: {}", CLUSTER_SLUGS.join(", "))]
pub struct UnknownClusterSlug {
	/// The slug that failed to parse
	pub slug: String,
}
