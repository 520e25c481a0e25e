//! 认证授权模块
//!
//! 提供 JWT 认证和角色检查：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文
//! - [`require_auth`] - 认证中间件
//! - [`require_admin`] - 管理员中间件
//!
//! La emisión de tokens (login) vive en otro servicio; aquí sólo se
//! validan tokens firmados con el secreto configurado.

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{ADMIN_ROLE, Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
