//! Cart Model
//!
//! A cart is the ordered list of product lines a customer (or sales rep) is
//! about to price. Lines are unique by product code and never kept at zero
//! quantity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Physical kind of product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Tool,
    Consumable,
    /// Anything the store sent that we do not recognise
    #[serde(other)]
    Unknown,
}

/// Pricing tier stamped on a consumable product
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    Standard,
    Premium,
    #[default]
    None,
    /// Anything the store sent that we do not recognise
    #[serde(other)]
    Unknown,
}

/// One requested product line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_code: String,
    pub quantity: i64,
    /// Undiscounted catalog price
    pub base_unit_price: Decimal,
    /// Extra negotiated discount, independent of tier (0-100)
    #[serde(default)]
    pub line_discount_percent: Decimal,
    pub product_type: ProductType,
    /// Only meaningful for consumables
    #[serde(default)]
    pub pricing_tier: PricingTier,
}

impl CartLine {
    pub fn new(
        product_code: impl Into<String>,
        quantity: i64,
        base_unit_price: Decimal,
        product_type: ProductType,
        pricing_tier: PricingTier,
    ) -> Self {
        Self {
            product_code: product_code.into(),
            quantity,
            base_unit_price,
            line_discount_percent: Decimal::ZERO,
            product_type,
            pricing_tier,
        }
    }

    pub fn with_line_discount(mut self, percent: Decimal) -> Self {
        self.line_discount_percent = percent;
        self
    }
}

/// Ordered cart keyed by product code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw lines, merging repeated product codes
    /// (quantities add up, the first occurrence keeps its price data) and
    /// dropping lines whose resulting quantity is zero or below.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut merged: Vec<CartLine> = Vec::new();
        for line in lines {
            match merged
                .iter_mut()
                .find(|l| l.product_code == line.product_code)
            {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
                None => merged.push(line),
            }
        }
        merged.retain(|l| l.quantity > 0);
        Self { lines: merged }
    }

    /// Insert or replace a line; a quantity of zero or below removes it
    pub fn upsert(&mut self, line: CartLine) {
        if line.quantity <= 0 {
            self.remove(&line.product_code);
            return;
        }
        match self
            .lines
            .iter_mut()
            .find(|l| l.product_code == line.product_code)
        {
            Some(existing) => *existing = line,
            None => self.lines.push(line),
        }
    }

    /// Change the quantity of an existing line
    ///
    /// Returns false when the product is not in the cart. A quantity of zero
    /// or below removes the line.
    pub fn set_quantity(&mut self, product_code: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_code).is_some();
        }
        match self.lines.iter_mut().find(|l| l.product_code == product_code) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, product_code: &str) -> Option<CartLine> {
        let index = self
            .lines
            .iter()
            .position(|l| l.product_code == product_code)?;
        Some(self.lines.remove(index))
    }

    pub fn get(&self, product_code: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_code == product_code)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
