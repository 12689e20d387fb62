//! Pricing Engine
//!
//! Prices a cart against a tier catalog in three groups:
//!
//! - **standard**: quantities of all standard consumables are summed; the
//!   band resolved for that total re-prices every standard line
//! - **premium**: each premium line resolves its own band from its own quantity
//! - **tool**: quantities of all tools are summed; the resolved discount applies
//!   to every tool line's own base price
//!
//! Lines without a tier keep their base price minus their own line discount.
//! The engine is pure: same cart and catalog, same output.

use super::calculator::{LineCalculation, calculate_line};
use super::classifier::{Classification, classify};
use super::formatter::format_preview;
use super::resolver::resolve_band;
use super::validation::validate_cart;
use super::PricingError;
use rust_decimal::Decimal;
use shared::models::{BandPricing, CartLine, PricingPreview, TierBand, TierCatalog, TierKey};
use std::fmt;

/// A line the engine could not classify, priced with no tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQualityWarning {
    pub product_code: String,
    pub reason: &'static str,
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.product_code, self.reason)
    }
}

/// One priced line with everything the formatter needs to label it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub product_code: String,
    pub quantity: u64,
    pub base_unit_price: Decimal,
    pub line_discount_percent: Decimal,
    pub classification: Classification,
    /// Band resolved for the line's tier group
    pub band: Option<TierBand>,
    /// Quantity the band was resolved against (group total for standard/tool)
    pub basis_quantity: u64,
    pub calculation: LineCalculation,
}

impl PricedLine {
    /// Whether the final unit price ended up below the base price
    ///
    /// A discount that rounding cancels out (sub-cent prices) lowered nothing.
    pub fn price_lowered(&self) -> bool {
        self.calculation.unit_price < self.base_unit_price
    }

    /// Whether the tier band actually lowered the price
    pub fn tier_discount_applied(&self) -> bool {
        if !self.price_lowered() {
            return false;
        }
        match self.band.as_ref().map(|b| b.pricing) {
            Some(BandPricing::UnitPrice(_)) => {
                self.calculation.adjusted_base < self.base_unit_price
            }
            Some(BandPricing::DiscountPercent(percent)) => {
                percent > Decimal::ZERO && self.base_unit_price > Decimal::ZERO
            }
            None => false,
        }
    }

    /// Whether the line's own discount contributed
    pub fn line_discount_applied(&self) -> bool {
        self.price_lowered()
            && self.line_discount_percent > Decimal::ZERO
            && self.calculation.tier_discount_percent < Decimal::ONE_HUNDRED
            && self.calculation.adjusted_base > Decimal::ZERO
    }
}

/// Engine result before formatting
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineOutput {
    /// Priced lines, in cart order (zero-quantity lines omitted)
    pub lines: Vec<PricedLine>,
    pub subtotal: Decimal,
    pub total_savings: Decimal,
    pub warnings: Vec<DataQualityWarning>,
}

/// Price every line of `cart` against `catalog`
///
/// Fails without partial output when any line is invalid. Lines with
/// quantity 0 are skipped.
pub fn price_lines(
    cart: &[CartLine],
    catalog: &TierCatalog,
) -> Result<EngineOutput, PricingError> {
    validate_cart(cart)?;

    let classified: Vec<(&CartLine, u64, Classification)> = cart
        .iter()
        .filter_map(|line| {
            let quantity = u64::try_from(line.quantity).ok().filter(|q| *q > 0)?;
            Some((line, quantity, classify(line)))
        })
        .collect();

    // Aggregate groups share one band
    let mut standard_quantity: u64 = 0;
    let mut tool_quantity: u64 = 0;
    for (_, quantity, classification) in &classified {
        match classification.tier() {
            Some(TierKey::Standard) => {
                standard_quantity = standard_quantity.saturating_add(*quantity)
            }
            Some(TierKey::Tool) => tool_quantity = tool_quantity.saturating_add(*quantity),
            Some(TierKey::Premium) | None => {}
        }
    }
    let standard_band = resolve_band(catalog.table(TierKey::Standard), standard_quantity);
    let tool_band = resolve_band(catalog.table(TierKey::Tool), tool_quantity);

    let mut output = EngineOutput::default();
    for (line, quantity, classification) in classified {
        let (band, basis_quantity) = match classification.tier() {
            Some(TierKey::Standard) => (standard_band, standard_quantity),
            Some(TierKey::Tool) => (tool_band, tool_quantity),
            Some(TierKey::Premium) => {
                (resolve_band(catalog.table(TierKey::Premium), quantity), quantity)
            }
            None => (None, quantity),
        };

        if let Classification::Unclassifiable(reason) = classification {
            output.warnings.push(DataQualityWarning {
                product_code: line.product_code.clone(),
                reason,
            });
        }

        let calculation = calculate_line(
            line.base_unit_price,
            quantity,
            line.line_discount_percent,
            band,
        );
        output.subtotal += calculation.line_total;
        output.total_savings += calculation.savings;
        output.lines.push(PricedLine {
            product_code: line.product_code.clone(),
            quantity,
            base_unit_price: line.base_unit_price,
            line_discount_percent: line.line_discount_percent,
            classification,
            band: band.cloned(),
            basis_quantity,
            calculation,
        });
    }

    Ok(output)
}

/// Price a cart and format the preview (no external charges)
pub fn price(cart: &[CartLine], catalog: &TierCatalog) -> Result<PricingPreview, PricingError> {
    price_lines(cart, catalog).map(|output| format_preview(&output))
}
