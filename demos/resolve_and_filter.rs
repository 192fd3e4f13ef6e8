//! Example demonstrating live resolution and container filtering

use spl_token_registry::{ChainId, RegistryBuilder, StrategyId};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Load .env file if it exists
	dotenvy::dotenv().ok();

	// Initialize tracing
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	info!("🚀 Starting token registry demo");

	// Build a provider from config file or defaults
	let provider = RegistryBuilder::new().build()?;

	// Resolve through the default CDN strategy; a failed source degrades to
	// the bundled snapshot, so this always yields records
	let container = provider.resolve().await?;
	info!("✅ Resolved {} token records", container.len());

	// Chainable filters return fresh containers
	let mainnet = container.filter_by_chain_id(ChainId::MainnetBeta);
	let stablecoins = mainnet.filter_by_tag("stablecoin");
	println!(
		"\n📊 {} mainnet records, {} of them stablecoins:",
		mainnet.len(),
		stablecoins.len()
	);
	for token in stablecoins.get_list().iter().take(10) {
		println!("  - {:<8} {} ({} decimals)", token.symbol, token.address, token.decimals);
	}

	// Cluster slugs alias the chain ids
	for slug in ["mainnet-beta", "testnet", "devnet"] {
		let view = container.filter_by_cluster_slug(slug)?;
		println!("  {} has {} records", slug, view.len());
	}

	// The only fallible filter: an unrecognized slug
	if let Err(e) = container.filter_by_cluster_slug("betanet") {
		println!("\n⚠️  {}", e);
	}

	// The same records are also reachable through an explicit strategy
	let from_github = provider.resolve_with(StrategyId::Github).await?;
	info!("GitHub strategy resolved {} records", from_github.len());

	info!("🎉 Demo completed successfully!");

	Ok(())
}
