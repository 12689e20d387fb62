//! Pricing Preview Model
//!
//! The priced cart as consumed by the portal UI and forwarded, unchanged,
//! to invoice creation. Field names are part of the contract with both.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewLine {
    pub product_code: String,
    pub quantity: u64,
    /// The line's own base unit price (what the UI shows struck through)
    pub base_price: Decimal,
    /// Unit price after tier and line discounts
    pub unit_price: Decimal,
    pub line_total: Decimal,
    /// Human label of what fired, `null` when nothing did
    pub discount_applied: Option<String>,
}

/// Priced cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPreview {
    pub lines: Vec<PreviewLine>,
    /// Sum of line totals
    pub subtotal: Decimal,
    /// Sum over lines of (base_price - unit_price) x quantity
    pub total_savings: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<Decimal>,
    /// subtotal + shipping + vat_amount
    pub total: Decimal,
}

/// Shipping and VAT as computed by the external shipping/VAT calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalCharges {
    #[serde(default)]
    pub shipping: Option<Decimal>,
    #[serde(default)]
    pub vat_amount: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_field_names() {
        let preview = PricingPreview {
            lines: vec![PreviewLine {
                product_code: "BLD-100".to_string(),
                quantity: 12,
                base_price: Decimal::from(20),
                unit_price: Decimal::from(16),
                line_total: Decimal::from(192),
                discount_applied: None,
            }],
            subtotal: Decimal::from(192),
            total_savings: Decimal::from(48),
            shipping: None,
            vat_amount: None,
            total: Decimal::from(192),
        };

        let json = serde_json::to_value(&preview).unwrap();
        let line = &json["lines"][0];
        for field in [
            "product_code",
            "quantity",
            "base_price",
            "unit_price",
            "line_total",
            "discount_applied",
        ] {
            assert!(line.get(field).is_some(), "missing {field}");
        }
        assert!(line["discount_applied"].is_null());
        assert_eq!(json["subtotal"], 192.0);
        assert_eq!(json["total_savings"], 48.0);
        assert!(json.get("shipping").is_none());
        assert!(json.get("vat_amount").is_none());
    }

    #[test]
    fn test_external_charges_partial() {
        let charges: ExternalCharges = serde_json::from_str(r#"{"shipping": 12.5}"#).unwrap();
        assert_eq!(charges.shipping, Some(Decimal::new(125, 1)));
        assert_eq!(charges.vat_amount, None);
    }
}
