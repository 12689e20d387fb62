//! Data models
//!
//! Shared between the pricing server and the portal front-end (via API).
//! Money and percentages are `rust_decimal::Decimal`, serialized as JSON
//! numbers.

pub mod cart;
pub mod preview;
pub mod product;
pub mod tier;

// Re-exports
pub use cart::*;
pub use preview::*;
pub use product::*;
pub use tier::*;
