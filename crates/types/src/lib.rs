//! SPL Token Registry Types
//!
//! Shared models and traits for the SPL token registry. This crate contains
//! the token record shapes, the cluster and network vocabulary, the
//! resolution strategy contract, and the filterable container callers
//! receive.

pub mod container;
pub mod models;
pub mod resolvers;

// Re-export serde_json for convenience
pub use serde_json;

// Re-export commonly used types for convenience
pub use container::TokenListContainer;

pub use models::{
	ChainId, Cluster, TagDetails, TokenExtensions, TokenInfo, TokenList, TokenListVersion,
	UnknownClusterSlug, CLUSTER_SLUGS,
};

pub use resolvers::{FetchError, FetchResult, ResolveStrategy, StrategyId};
