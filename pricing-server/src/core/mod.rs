//! 核心模块 - 配置、共享状态与 HTTP 服务器
//!
//! 启动顺序: [`Config::from_env`] → [`ServerState::initialize`] (加载定价数据文件)
//! → [`Server::run`] (绑定端口, Ctrl-C 优雅退出)。

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
