//! Shared domain models used across resolvers, the provider, and callers

pub mod chain;
pub mod token;
pub mod token_list;

pub use chain::{ChainId, Cluster, UnknownClusterSlug, CLUSTER_SLUGS};
pub use token::{TokenExtensions, TokenInfo};
pub use token_list::{TagDetails, TokenList, TokenListVersion};
