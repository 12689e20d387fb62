//! Product and Portal Models
//!
//! The product directory and the customer portal accounts the pricing
//! server resolves a portal request against.

use super::cart::{CartLine, PricingTier, ProductType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_code: String,
    pub name: String,
    pub base_unit_price: Decimal,
    pub product_type: ProductType,
    #[serde(default)]
    pub pricing_tier: PricingTier,
}

impl Product {
    /// Cart line for `quantity` units of this product
    pub fn to_cart_line(&self, quantity: i64, line_discount_percent: Decimal) -> CartLine {
        CartLine {
            product_code: self.product_code.clone(),
            quantity,
            base_unit_price: self.base_unit_price,
            line_discount_percent,
            product_type: self.product_type,
            pricing_tier: self.pricing_tier,
        }
    }
}

/// Customer portal account
///
/// The token is the key embedded in the customer's quote/reorder link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalAccount {
    pub token: String,
    pub customer_name: String,
    /// Negotiated discount percent by product code
    #[serde(default)]
    pub discounts: BTreeMap<String, Decimal>,
}

impl PortalAccount {
    /// Negotiated discount for a product (0 when none was agreed)
    pub fn discount_for(&self, product_code: &str) -> Decimal {
        self.discounts
            .get(product_code)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}
