//! Usuario Model
//!
//! La gestión de usuarios (altas, login) vive fuera de este servicio.
//! Aquí sólo se lee la tabla `usuario` al expandir referencias, con la
//! proyección pública de siempre: nombre y email.

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

/// Proyección pública del usuario creador (`FETCH usuario`)
///
/// Los campos no proyectados del registro se descartan al deserializar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioPublico {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    pub nombre: String,
    pub email: String,
}
