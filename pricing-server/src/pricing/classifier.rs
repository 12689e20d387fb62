//! Line Item Classifier
//!
//! Assigns each cart line to the tier table that prices it.

use shared::models::{CartLine, PricingTier, ProductType, TierKey};

/// How a cart line participates in tier pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Priced by a tier table
    Tiered(TierKey),
    /// Consumable without a tier: base price plus its own line discount
    Untiered,
    /// Unrecognised type/tier combination, priced like `Untiered`
    Unclassifiable(&'static str),
}

impl Classification {
    pub fn tier(&self) -> Option<TierKey> {
        match self {
            Classification::Tiered(key) => Some(*key),
            Classification::Untiered | Classification::Unclassifiable(_) => None,
        }
    }
}

/// Classify a cart line
///
/// Tools always use the tool table whatever their `pricing_tier` says;
/// consumables follow their `pricing_tier`.
pub fn classify(line: &CartLine) -> Classification {
    match (line.product_type, line.pricing_tier) {
        (ProductType::Tool, _) => Classification::Tiered(TierKey::Tool),
        (ProductType::Consumable, PricingTier::Standard) => {
            Classification::Tiered(TierKey::Standard)
        }
        (ProductType::Consumable, PricingTier::Premium) => Classification::Tiered(TierKey::Premium),
        (ProductType::Consumable, PricingTier::None) => Classification::Untiered,
        (ProductType::Consumable, PricingTier::Unknown) => {
            Classification::Unclassifiable("unknown pricing_tier")
        }
        (ProductType::Unknown, _) => Classification::Unclassifiable("unknown product_type"),
    }
}
