//! Quote Builder API Handlers

use axum::{Json, extract::State};
use shared::models::PricingPreview;
use shared::request::QuotePreviewRequest;

use crate::api::pricing_preview::price_cart;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::validate_cart_size;

/// POST /api/quotes/preview - 报价单预览
pub async fn preview(
    State(state): State<ServerState>,
    Json(req): Json<QuotePreviewRequest>,
) -> AppResult<Json<PricingPreview>> {
    validate_cart_size(req.lines.len(), state.config.max_cart_lines)?;
    let preview = price_cart(&state, &req.lines, req.charges)?;
    Ok(Json(preview))
}
