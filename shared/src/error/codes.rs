//! Unified error codes for the pricing workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 3xxx: Portal errors
//! - 4xxx: Cart errors
//! - 6xxx: Product errors
//! - 7xxx: Tier catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the portal front-end can
/// switch on them without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 3xxx: Portal ====================
    /// Portal token does not match any customer account
    PortalTokenInvalid = 3001,

    // ==================== 4xxx: Cart ====================
    /// Cart has more lines than the configured maximum
    CartTooLarge = 4001,
    /// Quantity is negative or above the maximum
    InvalidQuantity = 4002,
    /// Unit price is negative or above the maximum
    InvalidPrice = 4003,
    /// Line discount percent outside [0, 100]
    InvalidDiscountPercent = 4004,
    /// Same product code appears twice in a priced cart
    DuplicateProductCode = 4005,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,

    // ==================== 7xxx: Catalog ====================
    /// Tier catalog failed validation
    CatalogInvalid = 7001,
    /// Two bands in one tier table share a minimum quantity
    OverlappingTierBands = 7002,
    /// Catalog was changed by someone else since it was read
    CatalogVersionConflict = 7003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Reading or writing the data store failed
    StorageError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Portal
            ErrorCode::PortalTokenInvalid => "Portal link is invalid or has expired",

            // Cart
            ErrorCode::CartTooLarge => "Cart has too many lines",
            ErrorCode::InvalidQuantity => "Quantity is invalid",
            ErrorCode::InvalidPrice => "Unit price is invalid",
            ErrorCode::InvalidDiscountPercent => "Discount percent must be between 0 and 100",
            ErrorCode::DuplicateProductCode => "Product code appears more than once",

            // Product
            ErrorCode::ProductNotFound => "Product not found",

            // Catalog
            ErrorCode::CatalogInvalid => "Tier catalog is invalid",
            ErrorCode::OverlappingTierBands => "Tier bands share a minimum quantity",
            ErrorCode::CatalogVersionConflict => "Tier catalog was modified concurrently",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageError => "Storage error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Portal
            3001 => Ok(ErrorCode::PortalTokenInvalid),

            // Cart
            4001 => Ok(ErrorCode::CartTooLarge),
            4002 => Ok(ErrorCode::InvalidQuantity),
            4003 => Ok(ErrorCode::InvalidPrice),
            4004 => Ok(ErrorCode::InvalidDiscountPercent),
            4005 => Ok(ErrorCode::DuplicateProductCode),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),

            // Catalog
            7001 => Ok(ErrorCode::CatalogInvalid),
            7002 => Ok(ErrorCode::OverlappingTierBands),
            7003 => Ok(ErrorCode::CatalogVersionConflict),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
