//! Centralized mocks and fixtures for testing
//!
//! This module provides a local token list host and reusable document
//! fixtures to reduce duplication across test files.

pub mod fixtures;
pub mod test_server;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use fixtures::ListFixtures;
#[allow(unused_imports)]
pub use test_server::TokenListServer;
