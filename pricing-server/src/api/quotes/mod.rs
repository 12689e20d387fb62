//! Quote Builder API 模块
//!
//! Admin quote builder: the caller supplies full cart lines (own prices,
//! types, tiers, discounts), priced against the live catalog.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/quotes/preview", post(handler::preview))
}
