//! External charges
//!
//! Shipping and VAT are computed elsewhere; the preview only adds them up.

use super::PricingError;
use super::validation::validate_charges;
use rust_decimal::Decimal;
use shared::models::{ExternalCharges, PricingPreview};

/// Attach shipping/VAT to a preview and recompute `total`
///
/// `total = subtotal + shipping + vat_amount`, absent values counting as 0.
pub fn apply_charges(
    mut preview: PricingPreview,
    charges: &ExternalCharges,
) -> Result<PricingPreview, PricingError> {
    validate_charges(charges)?;

    preview.shipping = charges.shipping;
    preview.vat_amount = charges.vat_amount;
    preview.total = preview.subtotal
        + charges.shipping.unwrap_or(Decimal::ZERO)
        + charges.vat_amount.unwrap_or(Decimal::ZERO);
    Ok(preview)
}
