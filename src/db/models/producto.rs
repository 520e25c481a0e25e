//! Producto Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::categoria::CategoriaResumen;
use super::serde_thing;
use super::usuario::UsuarioPublico;

pub type ProductoId = Thing;

/// Registro de producto tal como se almacena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producto {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<ProductoId>,
    pub nombre: String,
    /// Precio unitario. En las peticiones el campo se llama `precio`.
    #[serde(rename = "precioUni")]
    pub precio_uni: f64,
    #[serde(default)]
    pub descripcion: Option<String>,
    /// La baja de un producto pone este campo en false; nunca se borra el registro
    #[serde(default = "default_true")]
    pub disponible: bool,
    #[serde(with = "serde_thing")]
    pub categoria: Thing,
    #[serde(with = "serde_thing")]
    pub usuario: Thing,
}

fn default_true() -> bool {
    true
}

/// Lectura con usuario y categoría expandidos (`FETCH usuario, categoria`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductoFull {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<ProductoId>,
    pub nombre: String,
    #[serde(rename = "precioUni")]
    pub precio_uni: f64,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "default_true")]
    pub disponible: bool,
    pub categoria: CategoriaResumen,
    pub usuario: UsuarioPublico,
}

/// Resultado de búsqueda: sólo la categoría viene expandida
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductoConCategoria {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<ProductoId>,
    pub nombre: String,
    #[serde(rename = "precioUni")]
    pub precio_uni: f64,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "default_true")]
    pub disponible: bool,
    pub categoria: CategoriaResumen,
    #[serde(with = "serde_thing")]
    pub usuario: Thing,
}

/// Payload de creación. `precio` se almacena como `precioUni`;
/// `usuario` se toma siempre del token del llamador.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductoCreate {
    pub nombre: String,
    pub precio: f64,
    #[serde(default)]
    pub descripcion: Option<String>,
    /// Ausente equivale a disponible
    #[serde(default)]
    pub disponible: Option<bool>,
    /// Id de la categoría, con o sin prefijo de tabla
    pub categoria: String,
}

/// Payload de actualización: reemplazo completo de los cinco campos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductoUpdate {
    pub nombre: String,
    pub precio: f64,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub disponible: bool,
    pub categoria: String,
}
