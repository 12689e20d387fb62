//! Request types for the pricing API

use crate::models::{CartLine, ExternalCharges, TierCatalog, TierKey};
use serde::{Deserialize, Serialize};

/// One requested item on a portal preview (`product_code` + quantity only;
/// prices come from the product directory)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewItemInput {
    pub product_code: String,
    pub quantity: i64,
}

/// `POST /pricing-preview`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPreviewRequest {
    /// Portal token identifying the customer account
    pub token: String,
    #[serde(default)]
    pub items: Vec<PreviewItemInput>,
    /// Shipping/VAT already computed by the shipping calculator
    #[serde(default)]
    pub charges: Option<ExternalCharges>,
}

/// `POST /api/quotes/preview` (admin quote builder)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotePreviewRequest {
    #[serde(default)]
    pub lines: Vec<CartLine>,
    #[serde(default)]
    pub charges: Option<ExternalCharges>,
}

/// `PUT /api/tier-catalog`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierCatalogUpdate {
    pub catalog: TierCatalog,
    /// Version the editor started from; a mismatch is a conflict
    #[serde(default)]
    pub expected_version: Option<String>,
}

/// `POST /api/tier-catalog/resolve`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveBandRequest {
    pub tier: TierKey,
    pub quantity: u64,
}
