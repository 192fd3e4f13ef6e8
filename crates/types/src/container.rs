//! Immutable token list container
//!
//! Wraps one resolved, ordered sequence of [`TokenInfo`] records and exposes
//! chainable filters over it. Every operation is a fresh single pass that
//! returns a new container; the receiver is never mutated, so intermediate
//! views stay valid for as long as the caller keeps them.

use crate::models::{Cluster, TokenInfo, UnknownClusterSlug};

/// An immutable, ordered view over resolved token records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenListContainer {
	tokens: Vec<TokenInfo>,
}

impl TokenListContainer {
	/// Take ownership of a resolved record sequence. Order is preserved as
	/// given and never re-sorted; duplicate address/chain pairs pass through.
	pub fn new(tokens: Vec<TokenInfo>) -> Self {
		Self { tokens }
	}

	/// Keep records whose tag set contains `tag`. Untagged records never
	/// match.
	pub fn filter_by_tag(&self, tag: &str) -> Self {
		self.filtered(|token| token.has_tag(tag))
	}

	/// Keep records whose tag set does not contain `tag`. Untagged records
	/// are always kept.
	pub fn exclude_by_tag(&self, tag: &str) -> Self {
		self.filtered(|token| !token.has_tag(tag))
	}

	/// Keep records on the given network. Accepts [`ChainId`] or a raw
	/// numeric code.
	///
	/// [`ChainId`]: crate::models::ChainId
	pub fn filter_by_chain_id(&self, chain_id: impl Into<u64>) -> Self {
		let chain_id = chain_id.into();
		self.filtered(|token| token.chain_id == chain_id)
	}

	/// Keep records on any network other than the given one.
	pub fn exclude_by_chain_id(&self, chain_id: impl Into<u64>) -> Self {
		let chain_id = chain_id.into();
		self.filtered(|token| token.chain_id != chain_id)
	}

	/// Keep records on the network the cluster slug aliases. Fails on a slug
	/// outside the recognized set; this is the only fallible operation on
	/// the container.
	pub fn filter_by_cluster_slug(&self, slug: &str) -> Result<Self, UnknownClusterSlug> {
		let cluster: Cluster = slug.parse()?;
		Ok(self.filter_by_chain_id(cluster.chain_id()))
	}

	/// The current records, in source order
	pub fn get_list(&self) -> &[TokenInfo] {
		&self.tokens
	}

	/// Consume the container and yield the record sequence
	pub fn into_list(self) -> Vec<TokenInfo> {
		self.tokens
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	fn filtered(&self, predicate: impl Fn(&TokenInfo) -> bool) -> Self {
		Self {
			tokens: self
				.tokens
				.iter()
				.filter(|token| predicate(token))
				.cloned()
				.collect(),
		}
	}
}

impl From<Vec<TokenInfo>> for TokenListContainer {
	fn from(tokens: Vec<TokenInfo>) -> Self {
		Self::new(tokens)
	}
}
