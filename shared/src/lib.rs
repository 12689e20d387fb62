//! Shared types for the tooling-vendor pricing workspace
//!
//! Wire models (cart, tier catalog, pricing preview, products), request
//! types and the unified error system used by the pricing server and its
//! HTTP clients.

pub mod error;
pub mod models;
pub mod request;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
