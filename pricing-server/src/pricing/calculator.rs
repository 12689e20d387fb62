//! Line Price Calculator
//!
//! Applies a resolved tier band and the line's own discount to one cart line.
//!
//! - Discount bands add to the line discount; the sum is capped at 100%
//! - Unit-price bands replace the base price (never raising it); the line
//!   discount then applies on top of the new price
//!
//! Uses rust_decimal throughout.

use rust_decimal::prelude::*;
use shared::models::{BandPricing, TierBand};

/// Rounding for unit prices (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Round a monetary value to 2 decimal places
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Result of pricing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCalculation {
    /// Price the percentage discounts apply to (base, or the band's unit price)
    pub adjusted_base: Decimal,
    /// Percentage from the tier band (0 for unit-price bands)
    pub tier_discount_percent: Decimal,
    /// min(100, tier + line)
    pub combined_discount_percent: Decimal,
    /// Final unit price, rounded
    pub unit_price: Decimal,
    /// unit_price × quantity
    pub line_total: Decimal,
    /// (base − unit_price) × quantity
    pub savings: Decimal,
}

/// Price a single line
///
/// `band` is the band resolved for the line's tier group, if any. The result
/// never exceeds the base price and never goes below zero.
pub fn calculate_line(
    base_unit_price: Decimal,
    quantity: u64,
    line_discount_percent: Decimal,
    band: Option<&TierBand>,
) -> LineCalculation {
    let (adjusted_base, tier_discount_percent) = match band.map(|b| b.pricing) {
        Some(BandPricing::UnitPrice(price)) => {
            (price.max(Decimal::ZERO).min(base_unit_price), Decimal::ZERO)
        }
        Some(BandPricing::DiscountPercent(percent)) => (base_unit_price, percent),
        None => (base_unit_price, Decimal::ZERO),
    };

    // Both parts are bounded first so the sum cannot overflow
    let tier_discount_percent = tier_discount_percent.clamp(Decimal::ZERO, HUNDRED);
    let combined_discount_percent = (tier_discount_percent
        + line_discount_percent.clamp(Decimal::ZERO, HUNDRED))
    .min(HUNDRED);
    let factor = (HUNDRED - combined_discount_percent) / HUNDRED;

    // Rounding a base with more than 2 places could land above it
    let unit_price = round_money(adjusted_base * factor).min(base_unit_price);

    let qty = Decimal::from(quantity);
    let line_total = unit_price * qty;
    let savings = (base_unit_price - unit_price) * qty;

    LineCalculation {
        adjusted_base,
        tier_discount_percent,
        combined_discount_percent,
        unit_price,
        line_total,
        savings,
    }
}
