//! Pricing input errors

use rust_decimal::Decimal;
use shared::{AppError, ErrorCode};

/// Rejected pricing input
///
/// Raised before any line is priced; a cart that fails validation produces
/// no partial preview.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("cart line {index} has an empty product_code")]
    EmptyProductCode { index: usize },

    #[error("{product_code}: quantity must not be negative, got {quantity}")]
    NegativeQuantity { product_code: String, quantity: i64 },

    #[error("{product_code}: quantity exceeds maximum allowed ({max}), got {quantity}")]
    QuantityTooLarge {
        product_code: String,
        quantity: i64,
        max: i64,
    },

    #[error("{product_code}: base_unit_price must not be negative, got {price}")]
    NegativePrice { product_code: String, price: Decimal },

    #[error("{product_code}: base_unit_price exceeds maximum allowed ({max}), got {price}")]
    PriceTooLarge {
        product_code: String,
        price: Decimal,
        max: Decimal,
    },

    #[error("{product_code}: line_discount_percent must be between 0 and 100, got {percent}")]
    DiscountOutOfRange {
        product_code: String,
        percent: Decimal,
    },

    #[error("{product_code}: appears more than once in the cart")]
    DuplicateProductCode { product_code: String },

    #[error("{field} must not be negative, got {amount}")]
    NegativeCharge { field: &'static str, amount: Decimal },
}

impl PricingError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            PricingError::EmptyProductCode { .. } => ErrorCode::RequiredField,
            PricingError::NegativeQuantity { .. } | PricingError::QuantityTooLarge { .. } => {
                ErrorCode::InvalidQuantity
            }
            PricingError::NegativePrice { .. } | PricingError::PriceTooLarge { .. } => {
                ErrorCode::InvalidPrice
            }
            PricingError::DiscountOutOfRange { .. } => ErrorCode::InvalidDiscountPercent,
            PricingError::DuplicateProductCode { .. } => ErrorCode::DuplicateProductCode,
            PricingError::NegativeCharge { .. } => ErrorCode::ValueOutOfRange,
        }
    }

    /// Offending input field
    pub fn field(&self) -> &'static str {
        match self {
            PricingError::EmptyProductCode { .. } | PricingError::DuplicateProductCode { .. } => {
                "product_code"
            }
            PricingError::NegativeQuantity { .. } | PricingError::QuantityTooLarge { .. } => {
                "quantity"
            }
            PricingError::NegativePrice { .. } | PricingError::PriceTooLarge { .. } => {
                "base_unit_price"
            }
            PricingError::DiscountOutOfRange { .. } => "line_discount_percent",
            PricingError::NegativeCharge { field, .. } => field,
        }
    }

    pub fn product_code(&self) -> Option<&str> {
        match self {
            PricingError::NegativeQuantity { product_code, .. }
            | PricingError::QuantityTooLarge { product_code, .. }
            | PricingError::NegativePrice { product_code, .. }
            | PricingError::PriceTooLarge { product_code, .. }
            | PricingError::DiscountOutOfRange { product_code, .. }
            | PricingError::DuplicateProductCode { product_code } => Some(product_code),
            PricingError::EmptyProductCode { .. } | PricingError::NegativeCharge { .. } => None,
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        let mut app = AppError::with_message(err.error_code(), err.to_string())
            .with_detail("field", err.field());
        if let Some(code) = err.product_code() {
            app = app.with_detail("product_code", code);
        }
        app
    }
}
