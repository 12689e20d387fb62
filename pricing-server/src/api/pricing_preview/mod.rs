//! Pricing Preview API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /pricing-preview | POST | 门户报价预览 |
//! | /api/pricing-preview | POST | 同上 |

mod handler;

pub(crate) use handler::price_cart;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/pricing-preview", post(handler::preview))
        .route("/api/pricing-preview", post(handler::preview))
}
