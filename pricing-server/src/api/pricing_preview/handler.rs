//! Pricing Preview API Handlers

use axum::{Json, extract::State};
use shared::models::{Cart, CartLine, ExternalCharges, PricingPreview};
use shared::request::PricingPreviewRequest;

use crate::core::ServerState;
use crate::pricing::{self, PricingError};
use crate::utils::validation::{
    MAX_PRODUCT_CODE_LEN, MAX_TOKEN_LEN, validate_cart_size, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Price a cart against the current catalog snapshot
///
/// Data-quality warnings from the engine are logged here; the preview is
/// still returned.
pub(crate) fn price_cart(
    state: &ServerState,
    lines: &[CartLine],
    charges: Option<ExternalCharges>,
) -> AppResult<PricingPreview> {
    let catalog = state.store.catalog();
    let output = pricing::price_lines(lines, &catalog)?;

    for warning in &output.warnings {
        tracing::warn!(
            product_code = %warning.product_code,
            reason = warning.reason,
            "Unclassifiable cart line priced without tier"
        );
    }

    let preview = pricing::format_preview(&output);
    match charges {
        Some(charges) => Ok(pricing::apply_charges(preview, &charges)?),
        None => Ok(preview),
    }
}

/// POST /pricing-preview - 门户报价预览
///
/// Items carry only product code and quantity; prices come from the product
/// directory and negotiated discounts from the portal account.
pub async fn preview(
    State(state): State<ServerState>,
    Json(req): Json<PricingPreviewRequest>,
) -> AppResult<Json<PricingPreview>> {
    validate_required_text(&req.token, "token", MAX_TOKEN_LEN)?;
    validate_cart_size(req.items.len(), state.config.max_cart_lines)?;

    let portal = state
        .store
        .portal(&req.token)
        .ok_or_else(|| AppError::new(ErrorCode::PortalTokenInvalid))?;

    let mut lines = Vec::with_capacity(req.items.len());
    for item in &req.items {
        validate_required_text(&item.product_code, "product_code", MAX_PRODUCT_CODE_LEN)?;
        if item.quantity < 0 {
            return Err(PricingError::NegativeQuantity {
                product_code: item.product_code.clone(),
                quantity: item.quantity,
            }
            .into());
        }
        let product = state
            .store
            .product(&item.product_code)
            .ok_or_else(|| AppError::product_not_found(&item.product_code))?;
        lines.push(product.to_cart_line(item.quantity, portal.discount_for(&item.product_code)));
    }

    // Repeated codes merge; zero quantities drop out
    let cart = Cart::from_lines(lines);

    let preview = price_cart(&state, cart.lines(), req.charges)?;
    tracing::debug!(
        customer = %portal.customer_name,
        lines = preview.lines.len(),
        subtotal = %preview.subtotal,
        "Pricing preview computed"
    );
    Ok(Json(preview))
}
