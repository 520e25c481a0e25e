use thiserror::Error;

/// 启动和运行期间的服务器错误
///
/// Los errores de las peticiones HTTP se representan con
/// [`crate::utils::AppError`]; este tipo cubre únicamente el arranque.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
