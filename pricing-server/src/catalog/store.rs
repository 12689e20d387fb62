//! Tier Catalog Provider
//!
//! File-backed admin store holding the tier catalog, the product directory
//! and the portal accounts. The whole file is loaded into memory; readers get
//! an `Arc` snapshot of the catalog so a pricing call never observes a
//! half-applied update.
//!
//! ```json
//! {
//!   "tiers": { "standard": [...], "premium": [...], "tool": [...] },
//!   "updated_at": 1767225600000,
//!   "products": [{ "product_code": "CRS-200", ... }],
//!   "portals": [{ "token": "...", "customer_name": "...", "discounts": {} }]
//! }
//! ```

use super::validation::{CatalogError, validate_catalog, validate_portals, validate_products};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared::models::{PortalAccount, Product, TierCatalog, VersionedTierCatalog};
use shared::{AppError, ErrorCode};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// On-disk layout of the pricing data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingData {
    #[serde(default)]
    pub tiers: TierCatalog,
    /// Last catalog write (Unix millis); 0 when never written
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub portals: Vec<PortalAccount>,
}

/// Store failure
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed pricing data in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize pricing data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] CatalogError),

    #[error("catalog version conflict: expected {expected}, current is {current}")]
    VersionConflict { expected: String, current: String },
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Invalid(e) => e.into(),
            StoreError::VersionConflict { expected, current } => AppError::with_message(
                ErrorCode::CatalogVersionConflict,
                "The tier catalog was changed by someone else; reload and retry",
            )
            .with_detail("expected_version", expected)
            .with_detail("current_version", current),
            other => AppError::storage(other.to_string()),
        }
    }
}

/// Hex SHA-256 of the catalog's JSON form
///
/// Field order of [`TierCatalog`] is fixed, so equal catalogs always hash
/// alike.
pub fn catalog_fingerprint(catalog: &TierCatalog) -> Result<String, StoreError> {
    let bytes = serde_json::to_vec(catalog)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

#[derive(Debug)]
struct StoreState {
    catalog: Arc<TierCatalog>,
    version: String,
    updated_at: i64,
    products: Vec<Product>,
    product_index: HashMap<String, usize>,
    portals: Vec<PortalAccount>,
    portal_index: HashMap<String, usize>,
}

impl StoreState {
    fn build(data: PricingData) -> Result<Self, StoreError> {
        validate_catalog(&data.tiers)?;
        validate_products(&data.products)?;
        validate_portals(&data.portals)?;

        let version = catalog_fingerprint(&data.tiers)?;
        let product_index = data
            .products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.product_code.clone(), i))
            .collect();
        let portal_index = data
            .portals
            .iter()
            .enumerate()
            .map(|(i, p)| (p.token.clone(), i))
            .collect();

        Ok(Self {
            catalog: Arc::new(data.tiers),
            version,
            updated_at: data.updated_at,
            products: data.products,
            product_index,
            portals: data.portals,
            portal_index,
        })
    }

    fn to_data(&self) -> PricingData {
        PricingData {
            tiers: (*self.catalog).clone(),
            updated_at: self.updated_at,
            products: self.products.clone(),
            portals: self.portals.clone(),
        }
    }

    fn versioned(&self) -> VersionedTierCatalog {
        VersionedTierCatalog {
            version: self.version.clone(),
            updated_at: self.updated_at,
            catalog: (*self.catalog).clone(),
        }
    }
}

/// Admin store for tiers, products and portal accounts
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    state: RwLock<StoreState>,
    /// Serializes writers; readers never wait on file I/O
    writer: Mutex<()>,
}

impl CatalogStore {
    /// Load the data file; a missing file starts an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "Pricing data file not found, starting with an empty catalog"
                );
                PricingData::default()
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        Self::from_data(path, data)
    }

    /// Build a store from data already in memory; writes go to `path`
    pub fn from_data(path: impl Into<PathBuf>, data: PricingData) -> Result<Self, StoreError> {
        let state = StoreState::build(data)?;
        tracing::info!(
            version = %state.version,
            products = state.products.len(),
            portals = state.portals.len(),
            "Pricing data loaded"
        );
        Ok(Self {
            path: path.into(),
            state: RwLock::new(state),
            writer: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Catalog snapshot for one pricing call
    pub fn catalog(&self) -> Arc<TierCatalog> {
        Arc::clone(&self.state.read().catalog)
    }

    pub fn version(&self) -> String {
        self.state.read().version.clone()
    }

    pub fn versioned(&self) -> VersionedTierCatalog {
        self.state.read().versioned()
    }

    pub fn product(&self, product_code: &str) -> Option<Product> {
        let state = self.state.read();
        state
            .product_index
            .get(product_code)
            .and_then(|&i| state.products.get(i))
            .cloned()
    }

    pub fn portal(&self, token: &str) -> Option<PortalAccount> {
        let state = self.state.read();
        state
            .portal_index
            .get(token)
            .and_then(|&i| state.portals.get(i))
            .cloned()
    }

    /// Validate and replace the tier catalog
    ///
    /// When `expected_version` is given it must match the current version.
    /// The file is written (temp file + rename) before the in-memory catalog
    /// is swapped, so a failed write leaves both unchanged. Only the swap
    /// takes the state write lock; snapshot reads continue during the write.
    pub fn replace_catalog(
        &self,
        catalog: TierCatalog,
        expected_version: Option<&str>,
    ) -> Result<VersionedTierCatalog, StoreError> {
        validate_catalog(&catalog)?;
        let version = catalog_fingerprint(&catalog)?;

        // Held to the end: no other writer can move the version meanwhile
        let _writer = self.writer.lock();

        let mut data = {
            let state = self.state.read();
            if let Some(expected) = expected_version
                && expected != state.version
            {
                return Err(StoreError::VersionConflict {
                    expected: expected.to_string(),
                    current: state.version.clone(),
                });
            }
            state.to_data()
        };
        data.tiers = catalog;
        data.updated_at = chrono::Utc::now().timestamp_millis();
        write_atomic(&self.path, &data)?;

        let mut state = self.state.write();
        state.catalog = Arc::new(data.tiers);
        state.version = version;
        state.updated_at = data.updated_at;
        tracing::info!(version = %state.version, "Tier catalog replaced");
        Ok(state.versioned())
    }
}

/// Write to `<path>.tmp`, then rename over `path`
fn write_atomic(path: &Path, data: &PricingData) -> Result<(), StoreError> {
    let contents = serde_json::to_vec_pretty(data)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, &contents).map_err(|source| StoreError::Write {
        path: temp_path.clone(),
        source,
    })?;
    if let Err(source) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(StoreError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
