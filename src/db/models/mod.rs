//! Data models for the catalog tables
//!
//! Cada recurso tiene su registro base (referencias como `Thing`) y,
//! cuando hace falta, modelos de lectura con las referencias expandidas
//! vía `FETCH`.

pub mod categoria;
pub mod producto;
pub mod serde_thing;
pub mod usuario;

pub use categoria::{Categoria, CategoriaCreate, CategoriaFull, CategoriaResumen, CategoriaUpdate};
pub use producto::{Producto, ProductoConCategoria, ProductoCreate, ProductoFull, ProductoUpdate};
pub use usuario::UsuarioPublico;
