//! Producto API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{
    Producto, ProductoConCategoria, ProductoCreate, ProductoFull, ProductoUpdate,
};
use crate::db::repository::ProductoRepository;
use crate::utils::{AppError, AppResult};

/// Parámetros de paginación (`?desde=&limite=`)
///
/// Valores ausentes o no numéricos caen al valor por defecto.
#[derive(Debug, Default, Deserialize)]
pub struct Paginacion {
    desde: Option<String>,
    limite: Option<String>,
}

impl Paginacion {
    /// Registros a saltar (por defecto 0)
    fn desde(&self) -> u64 {
        self.desde
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Tamaño de página (por defecto 5)
    fn limite(&self) -> u64 {
        self.limite
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5)
    }
}

#[derive(Debug, Serialize)]
pub struct ProductoListResponse<T> {
    pub ok: bool,
    pub productos: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct ProductoResponse<T> {
    pub ok: bool,
    pub producto: T,
}

#[derive(Debug, Serialize)]
pub struct ProductoBorradoResponse {
    pub ok: bool,
    #[serde(rename = "productoBorrado")]
    pub producto_borrado: Producto,
}

/// GET /productos - 获取产品列表
///
/// Sólo productos disponibles, paginados con `desde`/`limite`.
pub async fn list(
    State(state): State<ServerState>,
    Query(paginacion): Query<Paginacion>,
) -> AppResult<Json<ProductoListResponse<ProductoFull>>> {
    let repo = ProductoRepository::new(state.get_db());
    let productos = repo
        .find_available(paginacion.desde(), paginacion.limite())
        .await?;

    Ok(Json(ProductoListResponse {
        ok: true,
        productos,
    }))
}

/// GET /productos/{id} - 获取单个产品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductoResponse<ProductoFull>>> {
    let repo = ProductoRepository::new(state.get_db());
    let producto = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("No se encuentra el ID del producto"))?;

    Ok(Json(ProductoResponse { ok: true, producto }))
}

/// GET /productos/buscar/{termino} - 按名称搜索产品
///
/// Búsqueda por subcadena sin distinguir mayúsculas; incluye también
/// los productos no disponibles.
pub async fn search(
    State(state): State<ServerState>,
    Path(termino): Path<String>,
) -> AppResult<Json<ProductoListResponse<ProductoConCategoria>>> {
    let repo = ProductoRepository::new(state.get_db());
    let productos = repo.search_by_name(&termino).await?;

    Ok(Json(ProductoListResponse {
        ok: true,
        productos,
    }))
}

/// POST /productos - 创建产品
///
/// El campo `precio` del cuerpo se almacena como `precioUni`;
/// el usuario creador es siempre el llamador autenticado.
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ProductoCreate>,
) -> AppResult<Json<ProductoResponse<Producto>>> {
    let repo = ProductoRepository::new(state.get_db());
    let producto = repo
        .create(payload, &user.id)
        .await?
        .ok_or_else(|| AppError::invalid("Token inválido"))?;

    Ok(Json(ProductoResponse { ok: true, producto }))
}

/// PUT /productos/{id} - 更新产品
///
/// Sobrescribe los cinco campos mutables en una sola sentencia.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductoUpdate>,
) -> AppResult<Json<ProductoResponse<Producto>>> {
    let repo = ProductoRepository::new(state.get_db());
    let producto = repo
        .update(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("El ID no existe"))?;

    Ok(Json(ProductoResponse { ok: true, producto }))
}

/// DELETE /productos/{id} - 下架产品 (软删除)
///
/// Marca `disponible = false`; el registro nunca se elimina.
pub async fn delete_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductoBorradoResponse>> {
    let repo = ProductoRepository::new(state.get_db());
    let producto_borrado = repo
        .mark_unavailable(&id)
        .await?
        .ok_or_else(|| AppError::not_found("ID de producto no encontrado"))?;

    Ok(Json(ProductoBorradoResponse {
        ok: true,
        producto_borrado,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginacion_defaults() {
        let p = Paginacion::default();
        assert_eq!(p.desde(), 0);
        assert_eq!(p.limite(), 5);
    }

    #[test]
    fn test_paginacion_parses_numbers() {
        let p = Paginacion {
            desde: Some("5".to_string()),
            limite: Some("2".to_string()),
        };
        assert_eq!(p.desde(), 5);
        assert_eq!(p.limite(), 2);
    }

    #[test]
    fn test_paginacion_non_numeric_falls_back() {
        let p = Paginacion {
            desde: Some("abc".to_string()),
            limite: Some("-3".to_string()),
        };
        assert_eq!(p.desde(), 0);
        assert_eq!(p.limite(), 5);
    }
}
