//! Pricing Server - 阶梯定价服务
//!
//! # 架构概述
//!
//! - **定价引擎** (`pricing`): 行分类、阶梯解析、整车计价、预览格式化
//! - **阶梯价目录** (`catalog`): 文件存储的目录/商品/门户账户
//! - **HTTP API** (`api`): 门户预览、报价单预览、目录管理
//!
//! # 模块结构
//!
//! ```text
//! pricing-server/src/
//! ├── core/          # 配置、状态、错误、HTTP 服务器
//! ├── pricing/       # 纯计价逻辑 (无 I/O)
//! ├── catalog/       # 目录存储与校验
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、请求校验
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod pricing;
pub mod utils;

// Re-export 公共类型
pub use catalog::{CatalogStore, PricingData};
pub use crate::core::{Config, Server, ServerState};
pub use pricing::{PricingError, price, price_lines};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger;

/// 设置运行环境: 加载 .env 并初始化日志
pub fn setup_environment() -> anyhow::Result<Config> {
    // .env is optional
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
  ╔══════════════════════════════════════╗
  ║   Tier Pricing Server  v{:<13}║
  ╚══════════════════════════════════════╝
"#,
        env!("CARGO_PKG_VERSION")
    );
}
