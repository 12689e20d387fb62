//! Tier Catalog API Handlers

use axum::{Json, extract::State};
use shared::models::{TierBand, VersionedTierCatalog};
use shared::request::{ResolveBandRequest, TierCatalogUpdate};

use crate::core::ServerState;
use crate::pricing::resolve_band;
use crate::utils::{AppError, AppResult};

/// GET /api/tier-catalog - 获取当前阶梯价目录
pub async fn get_catalog(
    State(state): State<ServerState>,
) -> AppResult<Json<VersionedTierCatalog>> {
    Ok(Json(state.store.versioned()))
}

/// PUT /api/tier-catalog - 替换阶梯价目录
///
/// The file write runs on the blocking pool.
pub async fn replace_catalog(
    State(state): State<ServerState>,
    Json(payload): Json<TierCatalogUpdate>,
) -> AppResult<Json<VersionedTierCatalog>> {
    let store = state.store.clone();
    let updated = tokio::task::spawn_blocking(move || {
        store.replace_catalog(payload.catalog, payload.expected_version.as_deref())
    })
    .await
    .map_err(|e| AppError::internal(format!("catalog write task failed: {e}")))??;

    tracing::info!(version = %updated.version, "Tier catalog updated via API");
    Ok(Json(updated))
}

/// POST /api/tier-catalog/resolve - 查询数量命中的阶梯
pub async fn resolve(
    State(state): State<ServerState>,
    Json(req): Json<ResolveBandRequest>,
) -> AppResult<Json<Option<TierBand>>> {
    let catalog = state.store.catalog();
    Ok(Json(resolve_band(catalog.table(req.tier), req.quantity).cloned()))
}
