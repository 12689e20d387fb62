//! Tier Resolver
//!
//! Finds the band of a tier table that applies to a quantity.

use shared::models::TierBand;

/// Resolve the applicable band for `quantity`
///
/// Among the bands whose `[min_quantity, max_quantity]` range contains the
/// quantity, the one with the largest `min_quantity` wins. Table order is not
/// assumed to be sorted. When two qualifying bands share a minimum, the one
/// that appears first in the table wins.
///
/// Returns `None` for an empty table or when the quantity is below every
/// band's minimum.
pub fn resolve_band(table: &[TierBand], quantity: u64) -> Option<&TierBand> {
    table
        .iter()
        .filter(|band| band.contains(quantity))
        .fold(None, |best: Option<&TierBand>, band| match best {
            Some(current) if current.min_quantity >= band.min_quantity => Some(current),
            _ => Some(band),
        })
}
