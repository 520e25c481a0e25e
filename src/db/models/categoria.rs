//! Categoria Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;
use super::usuario::UsuarioPublico;

pub type CategoriaId = Thing;

/// Registro de categoría tal como se almacena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Categoria {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<CategoriaId>,
    pub descripcion: String,
    /// Usuario creador (referencia sin expandir)
    #[serde(with = "serde_thing")]
    pub usuario: Thing,
}

/// Lectura con el usuario creador expandido (`FETCH usuario`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriaFull {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<CategoriaId>,
    pub descripcion: String,
    pub usuario: UsuarioPublico,
}

/// Proyección usada al expandir la referencia desde producto
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriaResumen {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<CategoriaId>,
    pub descripcion: String,
}

/// Payload de creación. El usuario nunca viene del cuerpo de la petición;
/// se toma del token del llamador.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriaCreate {
    pub descripcion: String,
}

/// Payload de actualización (reemplazo completo)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriaUpdate {
    pub descripcion: String,
}
