//! Tier Catalog API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/tier-catalog | GET | 当前阶梯价目录 (含 version) |
//! | /api/tier-catalog | PUT | 校验并替换目录 |
//! | /api/tier-catalog/resolve | POST | 诊断: 数量命中的阶梯 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/tier-catalog",
            get(handler::get_catalog).put(handler::replace_catalog),
        )
        .route("/api/tier-catalog/resolve", post(handler::resolve))
}
