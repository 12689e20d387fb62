//! Input validation helpers
//!
//! Request-level limits checked in handlers before anything is priced.
//! Per-line pricing checks live in `pricing::validation`.

use shared::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Product codes (SKU style, e.g. "CRS-200")
pub const MAX_PRODUCT_CODE_LEN: usize = 64;

/// Portal tokens
pub const MAX_TOKEN_LEN: usize = 256;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(
            AppError::with_message(ErrorCode::RequiredField, format!("{field} must not be empty"))
                .with_detail("field", field),
        );
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Reject carts with more lines than the server accepts
pub fn validate_cart_size(lines: usize, max_lines: usize) -> Result<(), AppError> {
    if lines > max_lines {
        return Err(AppError::with_message(
            ErrorCode::CartTooLarge,
            format!("cart has {lines} lines, max {max_lines}"),
        )
        .with_detail("max_lines", max_lines));
    }
    Ok(())
}
