//! Resolution strategy contract shared by the resolver implementations

pub mod errors;
pub mod traits;

pub use errors::{FetchError, FetchResult};
pub use traits::{ResolveStrategy, StrategyId};
