//! Pricing Preview Formatter
//!
//! Turns engine output into the wire preview and renders the
//! `discount_applied` label for each line.

use super::engine::{EngineOutput, PricedLine};
use shared::models::{BandPricing, PreviewLine, PricingPreview, TierBand};

/// Build the preview from engine output
///
/// `total` equals `subtotal` until external charges are applied.
pub fn format_preview(output: &EngineOutput) -> PricingPreview {
    PricingPreview {
        lines: output.lines.iter().map(format_line).collect(),
        subtotal: output.subtotal,
        total_savings: output.total_savings,
        shipping: None,
        vat_amount: None,
        total: output.subtotal,
    }
}

fn format_line(line: &PricedLine) -> PreviewLine {
    PreviewLine {
        product_code: line.product_code.clone(),
        quantity: line.quantity,
        base_price: line.base_unit_price,
        unit_price: line.calculation.unit_price,
        line_total: line.calculation.line_total,
        discount_applied: discount_label(line),
    }
}

/// Human label of the discounts that lowered a line's price
///
/// `None` when the unit price equals the base price.
pub fn discount_label(line: &PricedLine) -> Option<String> {
    let mut parts = Vec::with_capacity(2);
    if let Some(band) = line.band.as_ref().filter(|_| line.tier_discount_applied()) {
        parts.push(band_label(band));
    }
    if line.line_discount_applied() {
        parts.push(format!(
            "{}% account discount",
            line.line_discount_percent.normalize()
        ));
    }
    (!parts.is_empty()).then(|| parts.join(" + "))
}

/// "12% off — 5+ units", "Volume price 30.00 — 50-199 units"
pub fn band_label(band: &TierBand) -> String {
    let range = quantity_range(band);
    match band.pricing {
        BandPricing::DiscountPercent(percent) => {
            format!("{}% off — {}", percent.normalize(), range)
        }
        BandPricing::UnitPrice(price) => format!("Volume price {:.2} — {}", price, range),
    }
}

fn quantity_range(band: &TierBand) -> String {
    let unit = |n: u64| if n == 1 { "unit" } else { "units" };
    match band.max_quantity {
        None => format!("{}+ units", band.min_quantity),
        Some(max) if max == band.min_quantity => format!("{} {}", max, unit(max)),
        Some(max) => format!("{}-{} units", band.min_quantity, max),
    }
}
