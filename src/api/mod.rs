//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`categoria`] - 分类管理接口
//! - [`productos`] - 产品管理接口

pub mod categoria;
pub mod health;
pub mod productos;

use axum::Router;

use crate::core::ServerState;

/// Ensambla el router completo de la aplicación
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(categoria::router(state.clone()))
        .merge(productos::router(state.clone()))
        .with_state(state)
}
