use std::sync::Arc;
use std::time::Instant;

use crate::catalog::CatalogStore;
use crate::core::{Config, Result};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<CatalogStore> | 阶梯价目录、商品、门户账户 |
/// | started_at | Instant | 启动时间 (健康检查用) |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<CatalogStore>,
    pub started_at: Instant,
}

impl ServerState {
    /// 加载定价数据并创建状态
    pub fn initialize(config: &Config) -> Result<Self> {
        let store = CatalogStore::open(&config.data_path)?;
        Ok(Self::with_store(config.clone(), store))
    }

    /// 使用已有的 store 创建状态 (测试用)
    pub fn with_store(config: Config, store: CatalogStore) -> Self {
        Self {
            config,
            store: Arc::new(store),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
