//! Shared identifiers and value types used across the catalog, printing and API crates.

pub mod money;
pub mod types;

pub use money::Money;
pub use types::{ItemId, OrderId};
