//! Test server for integration tests
//!
//! Hosts token list documents the way the real registry hosts do, plus
//! routes that misbehave on purpose for exercising fallback.

use axum::{http::header, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tokio::task::JoinHandle;

use super::fixtures::ListFixtures;

/// A local token list host bound to an ephemeral port
pub struct TokenListServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TokenListServer {
	/// Spawn a server exposing one route per fixture document
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let app = Router::new()
			.route("/solana.tokenlist.json", get(hosted_list))
			.route("/alt.tokenlist.json", get(alternate_list))
			.route("/bare.tokenlist.json", get(bare_list))
			.route("/broken.tokenlist.json", get(broken_list))
			.route("/unavailable.tokenlist.json", get(unavailable_list))
			.route("/slow.tokenlist.json", get(slow_list))
			.route("/hanging.tokenlist.json", get(hanging_list));

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	/// Absolute URL for a hosted route
	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}

async fn hosted_list() -> impl IntoResponse {
	Json(ListFixtures::hosted_document())
}

async fn alternate_list() -> impl IntoResponse {
	Json(ListFixtures::alternate_document())
}

async fn bare_list() -> impl IntoResponse {
	Json(ListFixtures::bare_document())
}

async fn broken_list() -> impl IntoResponse {
	(
		[(header::CONTENT_TYPE, "application/json")],
		"{ \"tokens\": [ oops",
	)
}

async fn unavailable_list() -> impl IntoResponse {
	StatusCode::SERVICE_UNAVAILABLE
}

// Serves the alternate document after a delay long enough that an instant
// sibling source always completes first
async fn slow_list() -> impl IntoResponse {
	tokio::time::sleep(tokio::time::Duration::from_millis(400)).await;
	Json(ListFixtures::alternate_document())
}

// Sleeps past any configured client timeout before answering
async fn hanging_list() -> impl IntoResponse {
	tokio::time::sleep(tokio::time::Duration::from_secs(30)).await;
	Json(ListFixtures::hosted_document())
}
