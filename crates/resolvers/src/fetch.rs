//! Source fetch pipeline shared by the network-backed strategies
//!
//! Each source is fetched and parsed independently; a source that cannot be
//! reached, answers with a non-success status, or serves a malformed
//! document is replaced by the bundled snapshot. Callers therefore always
//! receive records, and a healthy source is never penalized for a broken
//! sibling.

use futures::future::join_all;
use reqwest::Client;
use spl_token_registry_types::{FetchError, FetchResult, TokenInfo, TokenList};
use tracing::{debug, warn};

use crate::static_list::bundled_token_list;

/// What resolving one source produced
#[derive(Debug)]
pub(crate) enum SourceOutcome {
	/// Document fetched and parsed from the live source
	Live(TokenList),
	/// Bundled snapshot substituted after the source failed
	Fallback(&'static TokenList),
}

impl SourceOutcome {
	pub(crate) fn into_tokens(self) -> Vec<TokenInfo> {
		match self {
			SourceOutcome::Live(list) => list.tokens,
			SourceOutcome::Fallback(list) => list.tokens.clone(),
		}
	}
}

/// Fetch one source and parse it as a token list document
pub(crate) async fn fetch_token_list(client: &Client, url: &str) -> FetchResult<TokenList> {
	debug!("Fetching token list from {}", url);

	let response = client.get(url).send().await.map_err(FetchError::Http)?;

	if !response.status().is_success() {
		return Err(FetchError::Status {
			status: response.status().as_u16(),
			url: url.to_string(),
		});
	}

	let body = response.text().await.map_err(FetchError::Http)?;
	let list: TokenList = serde_json::from_str(&body).map_err(|e| FetchError::Parse {
		url: url.to_string(),
		source: e,
	})?;

	debug!("Source {} returned {} records", url, list.tokens.len());
	Ok(list)
}

/// Resolve every source concurrently and concatenate the results in source
/// order, substituting the bundled snapshot for each source that fails
pub(crate) async fn resolve_sources(client: &Client, sources: &[String]) -> Vec<TokenInfo> {
	let tasks = sources.iter().map(|url| async move {
		match fetch_token_list(client, url).await {
			Ok(list) => SourceOutcome::Live(list),
			Err(e) => {
				warn!("Source {} failed, substituting bundled snapshot: {}", url, e);
				SourceOutcome::Fallback(bundled_token_list())
			},
		}
	});

	let tokens: Vec<TokenInfo> = join_all(tasks)
		.await
		.into_iter()
		.flat_map(SourceOutcome::into_tokens)
		.collect();

	debug!(
		"Resolved {} records across {} sources",
		tokens.len(),
		sources.len()
	);

	tokens
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::client::{build_client, ClientOptions};
	use std::time::Duration;

	fn short_timeout_client() -> Client {
		build_client(&ClientOptions {
			timeout: Duration::from_millis(500),
			..ClientOptions::default()
		})
		.unwrap()
	}

	#[test]
	fn test_live_outcome_keeps_fetched_records() {
		let list: TokenList = serde_json::from_str(
			r#"{ "name": "Live", "tokens": [
				{ "chainId": 101, "address": "A", "symbol": "A", "name": "A", "decimals": 0 }
			] }"#,
		)
		.unwrap();

		let tokens = SourceOutcome::Live(list).into_tokens();
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].address, "A");
	}

	#[test]
	fn test_fallback_outcome_serves_the_snapshot() {
		let tokens = SourceOutcome::Fallback(bundled_token_list()).into_tokens();
		assert_eq!(tokens, bundled_token_list().tokens);
	}

	#[tokio::test]
	async fn test_unreachable_source_falls_back_to_snapshot() {
		let client = short_timeout_client();
		let sources = vec!["http://127.0.0.1:1/solana.tokenlist.json".to_string()];

		let tokens = resolve_sources(&client, &sources).await;
		assert_eq!(tokens, bundled_token_list().tokens);
	}

	#[tokio::test]
	async fn test_every_failed_source_contributes_the_snapshot() {
		let client = short_timeout_client();
		let sources = vec![
			"http://127.0.0.1:1/a.json".to_string(),
			"http://127.0.0.1:1/b.json".to_string(),
		];

		let tokens = resolve_sources(&client, &sources).await;
		assert_eq!(tokens.len(), bundled_token_list().tokens.len() * 2);
	}

	#[tokio::test]
	async fn test_no_sources_resolves_empty() {
		let client = short_timeout_client();
		let tokens = resolve_sources(&client, &[]).await;
		assert!(tokens.is_empty());
	}
}
