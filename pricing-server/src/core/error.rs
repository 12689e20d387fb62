use thiserror::Error;

use crate::catalog::StoreError;

/// 服务器启动/运行错误
///
/// Request-level failures use [`shared::AppError`]; this covers what can stop
/// the process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("定价数据加载失败: {0}")]
    Store(#[from] StoreError),

    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
