//! Example demonstrating the bundled snapshot and custom strategies
//!
//! Runs entirely offline: the static strategy serves the snapshot shipped
//! with the crate, and a mock strategy stands in for a network source.

use spl_token_registry::{
	mocks::MockListStrategy, Cluster, RegistryBuilder, Settings, StrategyId, TokenListProvider,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Initialize tracing
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	info!("🚀 Starting offline catalog demo");

	// The static strategy never touches the network
	let provider = TokenListProvider::new()?;
	let catalog = provider.resolve_with(StrategyId::Static).await?;
	info!("✅ Bundled snapshot holds {} records", catalog.len());

	for cluster in [Cluster::MainnetBeta, Cluster::Testnet, Cluster::Devnet] {
		let view = catalog.filter_by_chain_id(cluster.chain_id());
		println!("\n📊 {} ({} records):", cluster, view.len());
		for token in view.get_list() {
			let tags = token
				.tags
				.as_deref()
				.unwrap_or_default()
				.join(", ");
			println!("  - {:<8} {:<44} [{}]", token.symbol, token.address, tags);
		}
	}

	// A custom strategy replaces the built-in registered under the same
	// identifier
	let custom_provider = RegistryBuilder::new()
		.with_settings(Settings::default())
		.with_strategy(Box::new(MockListStrategy::with_sample_list(
			StrategyId::Cdn,
		)))
		.build()?;

	let sample = custom_provider.resolve().await?;
	println!("\n📊 Custom strategy serves {} sample records:", sample.len());
	for token in sample.get_list() {
		println!("  - {:<8} {}", token.symbol, token.name);
	}

	info!("🎉 Offline catalog demo completed!");

	Ok(())
}
