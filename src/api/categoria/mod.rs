//! Categoria API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::auth::{require_admin, require_auth};
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    // Sólo un administrador puede borrar una categoría
    let admin = Router::new()
        .route("/categoria/{id}", delete(handler::delete_by_id))
        .route_layer(middleware::from_fn(require_admin));

    Router::new()
        .route("/categoria", get(handler::list).post(handler::create))
        .route(
            "/categoria/{id}",
            get(handler::get_by_id).put(handler::update),
        )
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
