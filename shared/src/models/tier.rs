//! Tier Catalog Model
//!
//! Volume pricing tables. A catalog holds three independent tables
//! (standard, premium, tool); each table is a list of bands keyed by an
//! inclusive minimum quantity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing tier table key
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TierKey {
    Standard,
    Premium,
    Tool,
}

impl TierKey {
    pub const ALL: [TierKey; 3] = [TierKey::Standard, TierKey::Premium, TierKey::Tool];

    pub fn as_str(&self) -> &'static str {
        match self {
            TierKey::Standard => "standard",
            TierKey::Premium => "premium",
            TierKey::Tool => "tool",
        }
    }
}

impl fmt::Display for TierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a band does to the unit price once it qualifies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPricing {
    /// Replace the unit price with this absolute amount
    UnitPrice(Decimal),
    /// Take this percentage off the line's base unit price
    DiscountPercent(Decimal),
}

/// One row of a pricing tier table
///
/// On the wire a band carries exactly one of `unit_price` or
/// `discount_percent`; anything else is rejected when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TierBandRecord", into = "TierBandRecord")]
pub struct TierBand {
    /// Inclusive lower bound
    pub min_quantity: u64,
    /// Inclusive upper bound (None = unbounded)
    pub max_quantity: Option<u64>,
    pub pricing: BandPricing,
}

impl TierBand {
    pub fn unit_price(min_quantity: u64, max_quantity: Option<u64>, price: Decimal) -> Self {
        Self {
            min_quantity,
            max_quantity,
            pricing: BandPricing::UnitPrice(price),
        }
    }

    pub fn discount(min_quantity: u64, max_quantity: Option<u64>, percent: Decimal) -> Self {
        Self {
            min_quantity,
            max_quantity,
            pricing: BandPricing::DiscountPercent(percent),
        }
    }

    /// Whether `quantity` falls inside `[min_quantity, max_quantity]`
    pub fn contains(&self, quantity: u64) -> bool {
        quantity >= self.min_quantity && self.max_quantity.is_none_or(|max| quantity <= max)
    }
}

/// Flat wire shape of a [`TierBand`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TierBandRecord {
    min_quantity: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_quantity: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discount_percent: Option<Decimal>,
}

/// Rejected band shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TierBandShapeError {
    #[error("tier band starting at {0} sets both unit_price and discount_percent")]
    BothPricingFields(u64),
    #[error("tier band starting at {0} sets neither unit_price nor discount_percent")]
    NoPricingField(u64),
}

impl TryFrom<TierBandRecord> for TierBand {
    type Error = TierBandShapeError;

    fn try_from(record: TierBandRecord) -> Result<Self, Self::Error> {
        let pricing = match (record.unit_price, record.discount_percent) {
            (Some(price), None) => BandPricing::UnitPrice(price),
            (None, Some(percent)) => BandPricing::DiscountPercent(percent),
            (Some(_), Some(_)) => {
                return Err(TierBandShapeError::BothPricingFields(record.min_quantity));
            }
            (None, None) => return Err(TierBandShapeError::NoPricingField(record.min_quantity)),
        };
        Ok(Self {
            min_quantity: record.min_quantity,
            max_quantity: record.max_quantity,
            pricing,
        })
    }
}

impl From<TierBand> for TierBandRecord {
    fn from(band: TierBand) -> Self {
        let (unit_price, discount_percent) = match band.pricing {
            BandPricing::UnitPrice(price) => (Some(price), None),
            BandPricing::DiscountPercent(percent) => (None, Some(percent)),
        };
        Self {
            min_quantity: band.min_quantity,
            max_quantity: band.max_quantity,
            unit_price,
            discount_percent,
        }
    }
}

/// The three pricing tier tables
///
/// A missing table deserializes as empty ("no tier discount available").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCatalog {
    #[serde(default)]
    pub standard: Vec<TierBand>,
    #[serde(default)]
    pub premium: Vec<TierBand>,
    #[serde(default)]
    pub tool: Vec<TierBand>,
}

impl TierCatalog {
    pub fn table(&self, key: TierKey) -> &[TierBand] {
        match key {
            TierKey::Standard => &self.standard,
            TierKey::Premium => &self.premium,
            TierKey::Tool => &self.tool,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.premium.is_empty() && self.tool.is_empty()
    }
}

/// Catalog as held by the admin store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedTierCatalog {
    /// Content fingerprint (hex SHA-256 of the canonical catalog JSON)
    pub version: String,
    /// Last write time (Unix millis)
    pub updated_at: i64,
    pub catalog: TierCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_deserialize_unit_price() {
        let band: TierBand =
            serde_json::from_str(r#"{"min_quantity":50,"max_quantity":199,"unit_price":30}"#)
                .unwrap();
        assert_eq!(band.min_quantity, 50);
        assert_eq!(band.max_quantity, Some(199));
        assert_eq!(band.pricing, BandPricing::UnitPrice(Decimal::from(30)));
    }

    #[test]
    fn test_band_deserialize_open_ended_discount() {
        let band: TierBand =
            serde_json::from_str(r#"{"min_quantity":10,"discount_percent":15}"#).unwrap();
        assert_eq!(band.max_quantity, None);
        assert_eq!(band.pricing, BandPricing::DiscountPercent(Decimal::from(15)));
    }

    #[test]
    fn test_band_rejects_both_fields() {
        let result: Result<TierBand, _> = serde_json::from_str(
            r#"{"min_quantity":1,"unit_price":30,"discount_percent":5}"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("both unit_price and discount_percent"), "{err}");
    }

    #[test]
    fn test_band_rejects_no_pricing() {
        let result: Result<TierBand, _> = serde_json::from_str(r#"{"min_quantity":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_band_serializes_flat() {
        let band = TierBand::discount(5, None, Decimal::from(40));
        let json = serde_json::to_value(&band).unwrap();
        assert_eq!(json["min_quantity"], 5);
        assert_eq!(json["discount_percent"], 40.0);
        assert!(json.get("max_quantity").is_none());
        assert!(json.get("unit_price").is_none());
    }

    #[test]
    fn test_band_contains_is_inclusive() {
        let band = TierBand::unit_price(50, Some(199), Decimal::from(30));
        assert!(!band.contains(49));
        assert!(band.contains(50));
        assert!(band.contains(199));
        assert!(!band.contains(200));

        let open = TierBand::unit_price(200, None, Decimal::from(25));
        assert!(open.contains(u64::MAX));
    }

    #[test]
    fn test_catalog_missing_tables_default_empty() {
        let catalog: TierCatalog =
            serde_json::from_str(r#"{"tool":[{"min_quantity":2,"discount_percent":10}]}"#)
                .unwrap();
        assert!(catalog.standard.is_empty());
        assert!(catalog.premium.is_empty());
        assert_eq!(catalog.table(TierKey::Tool).len(), 1);
        assert!(!catalog.is_empty());
        assert!(TierCatalog::default().is_empty());
    }

    #[test]
    fn test_tier_key_names() {
        assert_eq!(TierKey::Premium.to_string(), "premium");
        let key: TierKey = serde_json::from_str("\"tool\"").unwrap();
        assert_eq!(key, TierKey::Tool);
    }
}
