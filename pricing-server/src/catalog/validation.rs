//! Catalog and directory validation
//!
//! Applied when the data file is loaded and on every admin write. The
//! engine itself prices whatever it is given; these checks keep a broken
//! configuration from reaching it.

use rust_decimal::Decimal;
use shared::models::{BandPricing, PortalAccount, Product, TierBand, TierCatalog, TierKey};
use shared::{AppError, ErrorCode};
use std::collections::HashSet;

/// Rejected catalog or directory content
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("{tier} band starting at {min_quantity}: max_quantity {max_quantity} is below min_quantity")]
    InvertedRange {
        tier: TierKey,
        min_quantity: u64,
        max_quantity: u64,
    },

    #[error("{tier} table has more than one band starting at {min_quantity}")]
    DuplicateMinimum { tier: TierKey, min_quantity: u64 },

    #[error("{tier} band starting at {min_quantity}: discount_percent must be between 0 and 100, got {percent}")]
    PercentOutOfRange {
        tier: TierKey,
        min_quantity: u64,
        percent: Decimal,
    },

    #[error("{tier} band starting at {min_quantity}: unit_price must not be negative, got {price}")]
    NegativeUnitPrice {
        tier: TierKey,
        min_quantity: u64,
        price: Decimal,
    },

    #[error("{tier} band starting at {min_quantity}: {tier} bands must use {expected}")]
    WrongPricingKind {
        tier: TierKey,
        min_quantity: u64,
        expected: &'static str,
    },

    #[error("product {product_code}: {reason}")]
    InvalidProduct {
        product_code: String,
        reason: String,
    },

    #[error("portal account {customer_name}: {reason}")]
    InvalidPortal {
        customer_name: String,
        reason: String,
    },
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::DuplicateMinimum { tier, min_quantity } => {
                AppError::with_message(ErrorCode::OverlappingTierBands, message)
                    .with_detail("tier", tier.as_str())
                    .with_detail("min_quantity", min_quantity)
            }
            CatalogError::InvertedRange {
                tier, min_quantity, ..
            }
            | CatalogError::PercentOutOfRange {
                tier, min_quantity, ..
            }
            | CatalogError::NegativeUnitPrice {
                tier, min_quantity, ..
            }
            | CatalogError::WrongPricingKind {
                tier, min_quantity, ..
            } => AppError::with_message(ErrorCode::CatalogInvalid, message)
                .with_detail("tier", tier.as_str())
                .with_detail("min_quantity", min_quantity),
            CatalogError::InvalidProduct { product_code, .. } => {
                AppError::with_message(ErrorCode::CatalogInvalid, message)
                    .with_detail("product_code", product_code)
            }
            CatalogError::InvalidPortal { .. } => {
                AppError::with_message(ErrorCode::CatalogInvalid, message)
            }
        }
    }
}

/// Pricing kind each table is configured with
fn expected_kind(tier: TierKey) -> &'static str {
    match tier {
        TierKey::Standard => "unit_price",
        TierKey::Premium | TierKey::Tool => "discount_percent",
    }
}

fn validate_band(tier: TierKey, band: &TierBand) -> Result<(), CatalogError> {
    let min_quantity = band.min_quantity;
    if let Some(max_quantity) = band.max_quantity
        && max_quantity < min_quantity
    {
        return Err(CatalogError::InvertedRange {
            tier,
            min_quantity,
            max_quantity,
        });
    }

    match (tier, band.pricing) {
        (TierKey::Standard, BandPricing::UnitPrice(price)) => {
            if price < Decimal::ZERO {
                return Err(CatalogError::NegativeUnitPrice {
                    tier,
                    min_quantity,
                    price,
                });
            }
        }
        (TierKey::Premium | TierKey::Tool, BandPricing::DiscountPercent(percent)) => {
            if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
                return Err(CatalogError::PercentOutOfRange {
                    tier,
                    min_quantity,
                    percent,
                });
            }
        }
        _ => {
            return Err(CatalogError::WrongPricingKind {
                tier,
                min_quantity,
                expected: expected_kind(tier),
            });
        }
    }
    Ok(())
}

/// Validate all three tier tables
pub fn validate_catalog(catalog: &TierCatalog) -> Result<(), CatalogError> {
    for tier in TierKey::ALL {
        let mut minimums = HashSet::new();
        for band in catalog.table(tier) {
            validate_band(tier, band)?;
            if !minimums.insert(band.min_quantity) {
                return Err(CatalogError::DuplicateMinimum {
                    tier,
                    min_quantity: band.min_quantity,
                });
            }
        }
    }
    Ok(())
}

/// Validate the product directory
pub fn validate_products(products: &[Product]) -> Result<(), CatalogError> {
    let mut codes = HashSet::with_capacity(products.len());
    for product in products {
        let invalid = |reason: &str| CatalogError::InvalidProduct {
            product_code: product.product_code.clone(),
            reason: reason.to_string(),
        };
        if product.product_code.trim().is_empty() {
            return Err(invalid("product_code must not be empty"));
        }
        if product.base_unit_price < Decimal::ZERO {
            return Err(invalid("base_unit_price must not be negative"));
        }
        if !codes.insert(product.product_code.as_str()) {
            return Err(invalid("listed more than once"));
        }
    }
    Ok(())
}

/// Validate portal accounts
pub fn validate_portals(portals: &[PortalAccount]) -> Result<(), CatalogError> {
    let mut tokens = HashSet::with_capacity(portals.len());
    for portal in portals {
        let invalid = |reason: String| CatalogError::InvalidPortal {
            customer_name: portal.customer_name.clone(),
            reason,
        };
        if portal.token.trim().is_empty() {
            return Err(invalid("token must not be empty".to_string()));
        }
        if !tokens.insert(portal.token.as_str()) {
            return Err(invalid("token is shared with another account".to_string()));
        }
        for (code, percent) in &portal.discounts {
            if *percent < Decimal::ZERO || *percent > Decimal::ONE_HUNDRED {
                return Err(invalid(format!(
                    "discount for {code} must be between 0 and 100, got {percent}"
                )));
            }
        }
    }
    Ok(())
}
