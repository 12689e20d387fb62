//! Tier Pricing Module
//!
//! Classifies cart lines, resolves volume tier bands and prices the cart
//! into a preview. Every surface that shows prices (portal, quote builder)
//! goes through [`price_lines`] so they all agree.

mod calculator;
mod charges;
pub mod classifier;
mod engine;
mod error;
mod formatter;
pub mod resolver;
pub mod validation;

pub use calculator::*;
pub use charges::*;
pub use classifier::{Classification, classify};
pub use engine::*;
pub use error::PricingError;
pub use formatter::*;
pub use resolver::resolve_band;
