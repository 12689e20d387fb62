//! Tier catalog, product directory and portal accounts

mod store;
pub mod validation;

pub use store::{CatalogStore, PricingData, StoreError, catalog_fingerprint};
pub use validation::{CatalogError, validate_catalog};
