//! Categoria API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Categoria, CategoriaCreate, CategoriaFull, CategoriaUpdate};
use crate::db::repository::CategoriaRepository;
use crate::utils::{AppError, AppResult};

/// `{ok, cant, categorias}` - cant es el total global de la tabla
#[derive(Debug, Serialize)]
pub struct CategoriaListResponse {
    pub ok: bool,
    pub cant: i64,
    pub categorias: Vec<CategoriaFull>,
}

#[derive(Debug, Serialize)]
pub struct CategoriaResponse {
    pub ok: bool,
    pub categoria: Categoria,
}

#[derive(Debug, Serialize)]
pub struct MensajeResponse {
    pub ok: bool,
    pub message: String,
}

/// GET /categoria - 获取所有分类
///
/// Ordenadas por descripción, con el usuario creador expandido.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<CategoriaListResponse>> {
    let repo = CategoriaRepository::new(state.get_db());
    let categorias = repo.find_all().await?;
    let cant = repo.count().await?;

    Ok(Json(CategoriaListResponse {
        ok: true,
        cant,
        categorias,
    }))
}

/// GET /categoria/{id} - 获取单个分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CategoriaResponse>> {
    let repo = CategoriaRepository::new(state.get_db());
    let categoria = repo
        .find_by_id(&id)
        .await?
        // este endpoint responde 500 cuando el registro falta; los
        // clientes existentes dependen de ese código de estado
        .ok_or_else(|| AppError::internal("No se encontro la categoria"))?;

    Ok(Json(CategoriaResponse {
        ok: true,
        categoria,
    }))
}

/// POST /categoria - 创建分类
///
/// El usuario creador es siempre el llamador autenticado.
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CategoriaCreate>,
) -> AppResult<Json<CategoriaResponse>> {
    let repo = CategoriaRepository::new(state.get_db());
    let categoria = repo
        .create(payload.descripcion, &user.id)
        .await?
        .ok_or_else(|| AppError::invalid("No se pudo crear la categoria"))?;

    Ok(Json(CategoriaResponse {
        ok: true,
        categoria,
    }))
}

/// PUT /categoria/{id} - 更新分类
///
/// Reemplazo completo: la descripción Y el dueño (pasa a ser el llamador).
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<CategoriaUpdate>,
) -> AppResult<Json<CategoriaResponse>> {
    let repo = CategoriaRepository::new(state.get_db());
    let categoria = repo
        .update(&id, payload.descripcion, &user.id)
        .await?
        .ok_or_else(|| AppError::not_found("El ID no existe"))?;

    Ok(Json(CategoriaResponse {
        ok: true,
        categoria,
    }))
}

/// DELETE /categoria/{id} - 永久删除分类 (仅管理员)
pub async fn delete_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MensajeResponse>> {
    let repo = CategoriaRepository::new(state.get_db());
    repo.delete(&id)
        .await?
        .ok_or_else(|| AppError::not_found("El ID no existe"))?;

    Ok(Json(MensajeResponse {
        ok: true,
        message: "Categoria borrada".to_string(),
    }))
}
