//! Producto API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    let protegido = Router::new()
        .route("/productos", get(handler::list).post(handler::create))
        .route("/productos/buscar/{termino}", get(handler::search))
        .route(
            "/productos/{id}",
            get(handler::get_by_id).put(handler::update),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    // La baja de producto queda fuera de la capa de autenticación:
    // los clientes existentes la llaman sin token
    Router::new()
        .merge(protegido)
        .route("/productos/{id}", delete(handler::delete_by_id))
}
