//! Cart input validation
//!
//! Runs at the engine boundary, before any line is priced.

use super::PricingError;
use rust_decimal::Decimal;
use shared::models::{CartLine, ExternalCharges};
use std::collections::HashSet;

/// Maximum allowed base unit price per line (1,000,000)
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i64 = 1_000_000;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Validate a single cart line
pub fn validate_cart_line(index: usize, line: &CartLine) -> Result<(), PricingError> {
    if line.product_code.trim().is_empty() {
        return Err(PricingError::EmptyProductCode { index });
    }

    if line.quantity < 0 {
        return Err(PricingError::NegativeQuantity {
            product_code: line.product_code.clone(),
            quantity: line.quantity,
        });
    }
    if line.quantity > MAX_QUANTITY {
        return Err(PricingError::QuantityTooLarge {
            product_code: line.product_code.clone(),
            quantity: line.quantity,
            max: MAX_QUANTITY,
        });
    }

    if line.base_unit_price < Decimal::ZERO {
        return Err(PricingError::NegativePrice {
            product_code: line.product_code.clone(),
            price: line.base_unit_price,
        });
    }
    if line.base_unit_price > MAX_PRICE {
        return Err(PricingError::PriceTooLarge {
            product_code: line.product_code.clone(),
            price: line.base_unit_price,
            max: MAX_PRICE,
        });
    }

    let pct = line.line_discount_percent;
    if pct < Decimal::ZERO || pct > HUNDRED {
        return Err(PricingError::DiscountOutOfRange {
            product_code: line.product_code.clone(),
            percent: pct,
        });
    }

    Ok(())
}

/// Validate every line and reject duplicate product codes
pub fn validate_cart(lines: &[CartLine]) -> Result<(), PricingError> {
    let mut seen = HashSet::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        validate_cart_line(index, line)?;
        if !seen.insert(line.product_code.as_str()) {
            return Err(PricingError::DuplicateProductCode {
                product_code: line.product_code.clone(),
            });
        }
    }
    Ok(())
}

/// Shipping and VAT come from the shipping calculator; only their sign is checked
pub fn validate_charges(charges: &ExternalCharges) -> Result<(), PricingError> {
    for (field, amount) in [("shipping", charges.shipping), ("vat_amount", charges.vat_amount)] {
        if let Some(amount) = amount.filter(|a| *a < Decimal::ZERO) {
            return Err(PricingError::NegativeCharge { field, amount });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{PricingTier, ProductType};

    fn line(code: &str, quantity: i64, price: i64) -> CartLine {
        CartLine::new(
            code,
            quantity,
            Decimal::from(price),
            ProductType::Consumable,
            PricingTier::None,
        )
    }

    #[test]
    fn test_valid_line() {
        assert!(validate_cart_line(0, &line("CRS-200", 3, 10)).is_ok());
        assert!(validate_cart_line(0, &line("CRS-200", 0, 0)).is_ok());
    }

    #[test]
    fn test_empty_code() {
        assert_eq!(
            validate_cart_line(4, &line("  ", 1, 1)),
            Err(PricingError::EmptyProductCode { index: 4 })
        );
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(matches!(
            validate_cart_line(0, &line("A", -1, 1)),
            Err(PricingError::NegativeQuantity { quantity: -1, .. })
        ));
        assert!(validate_cart_line(0, &line("A", MAX_QUANTITY, 1)).is_ok());
        assert!(matches!(
            validate_cart_line(0, &line("A", MAX_QUANTITY + 1, 1)),
            Err(PricingError::QuantityTooLarge { .. })
        ));
    }

    #[test]
    fn test_price_bounds() {
        assert!(matches!(
            validate_cart_line(0, &line("A", 1, -5)),
            Err(PricingError::NegativePrice { .. })
        ));
        assert!(validate_cart_line(0, &line("A", 1, 1_000_000)).is_ok());
        assert!(matches!(
            validate_cart_line(0, &line("A", 1, 1_000_001)),
            Err(PricingError::PriceTooLarge { .. })
        ));
    }

    #[test]
    fn test_discount_bounds() {
        let ok = line("A", 1, 10).with_line_discount(Decimal::ONE_HUNDRED);
        assert!(validate_cart_line(0, &ok).is_ok());

        let over = line("A", 1, 10).with_line_discount(Decimal::new(1001, 1));
        assert!(matches!(
            validate_cart_line(0, &over),
            Err(PricingError::DiscountOutOfRange { .. })
        ));

        let under = line("A", 1, 10).with_line_discount(Decimal::NEGATIVE_ONE);
        assert!(validate_cart_line(0, &under).is_err());
    }

    #[test]
    fn test_duplicate_codes() {
        let lines = vec![line("A", 1, 1), line("B", 1, 1), line("A", 2, 1)];
        assert_eq!(
            validate_cart(&lines),
            Err(PricingError::DuplicateProductCode {
                product_code: "A".to_string()
            })
        );
    }

    #[test]
    fn test_charges() {
        assert!(validate_charges(&ExternalCharges::default()).is_ok());
        let bad = ExternalCharges {
            shipping: Some(Decimal::from(5)),
            vat_amount: Some(Decimal::NEGATIVE_ONE),
        };
        assert!(matches!(
            validate_charges(&bad),
            Err(PricingError::NegativeCharge {
                field: "vat_amount",
                ..
            })
        ));
    }
}
