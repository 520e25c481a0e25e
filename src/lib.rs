//! Cafe Server - API REST de catálogo (categorías y productos)
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、角色检查
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (嵌入式 SurrealDB)
//! └── utils/         # 错误类型、日志
//! ```
//!
//! Los nombres de recursos, campos y mensajes del API están en español
//! porque forman parte del contrato HTTP con los clientes existentes.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepara el proceso: variables de entorno (`.env`) y logging.
///
/// Debe llamarse una única vez, antes de cargar [`Config`].
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(None, log_dir.as_deref().map(std::path::Path::new));
}
