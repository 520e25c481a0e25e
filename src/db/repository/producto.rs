//! Producto Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult, make_thing};
use crate::db::models::{
    Producto, ProductoConCategoria, ProductoCreate, ProductoFull, ProductoUpdate,
};

const TABLE: &str = "producto";
const CATEGORIA_TABLE: &str = "categoria";
const USUARIO_TABLE: &str = "usuario";

#[derive(Clone)]
pub struct ProductoRepository {
    base: BaseRepository,
}

impl ProductoRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Available products, paginated, creator and category expanded
    pub async fn find_available(&self, desde: u64, limite: u64) -> RepoResult<Vec<ProductoFull>> {
        // desde/limite ya vienen saneados como enteros
        let productos: Vec<ProductoFull> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM producto WHERE disponible = true \
                 LIMIT {limite} START {desde} FETCH usuario, categoria"
            ))
            .await?
            .take(0)?;
        Ok(productos)
    }

    /// Find product by id, creator and category expanded
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ProductoFull>> {
        let producto = make_thing(TABLE, id);
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM producto WHERE id = $producto FETCH usuario, categoria")
            .bind(("producto", producto))
            .await?;
        let productos: Vec<ProductoFull> = result.take(0)?;
        Ok(productos.into_iter().next())
    }

    /// Case-insensitive substring search on nombre, category expanded.
    ///
    /// El término se compara como texto literal en minúsculas, nunca se
    /// compila como patrón. Sin filtro de disponibilidad.
    pub async fn search_by_name(&self, termino: &str) -> RepoResult<Vec<ProductoConCategoria>> {
        let needle = termino.to_lowercase();
        let productos: Vec<ProductoConCategoria> = self
            .base
            .db()
            .query("SELECT * FROM producto WHERE string::contains(string::lowercase(nombre), $termino) FETCH categoria")
            .bind(("termino", needle))
            .await?
            .take(0)?;
        Ok(productos)
    }

    /// Create a new product owned by `usuario_id`
    pub async fn create(&self, data: ProductoCreate, usuario_id: &str) -> RepoResult<Option<Producto>> {
        let usuario = make_thing(USUARIO_TABLE, usuario_id);
        let categoria = make_thing(CATEGORIA_TABLE, &data.categoria);

        let mut result = self
            .base
            .db()
            .query(
                "CREATE producto SET nombre = $nombre, precioUni = $precio, \
                 descripcion = $descripcion, disponible = $disponible, \
                 categoria = $categoria, usuario = $usuario",
            )
            .bind(("nombre", data.nombre))
            .bind(("precio", data.precio))
            .bind(("descripcion", data.descripcion))
            .bind(("disponible", data.disponible.unwrap_or(true)))
            .bind(("categoria", categoria))
            .bind(("usuario", usuario))
            .await?;
        let creados: Vec<Producto> = result.take(0)?;
        Ok(creados.into_iter().next())
    }

    /// Full overwrite of the five mutable fields in a single statement
    pub async fn update(&self, id: &str, data: ProductoUpdate) -> RepoResult<Option<Producto>> {
        let producto = make_thing(TABLE, id);
        let categoria = make_thing(CATEGORIA_TABLE, &data.categoria);

        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $producto SET nombre = $nombre, precioUni = $precio, \
                 descripcion = $descripcion, disponible = $disponible, \
                 categoria = $categoria RETURN AFTER",
            )
            .bind(("producto", producto))
            .bind(("nombre", data.nombre))
            .bind(("precio", data.precio))
            .bind(("descripcion", data.descripcion))
            .bind(("disponible", data.disponible))
            .bind(("categoria", categoria))
            .await?;
        let actualizados: Vec<Producto> = result.take(0)?;
        Ok(actualizados.into_iter().next())
    }

    /// Soft delete: marca el producto como no disponible.
    ///
    /// Idempotente: repetir la baja sobre un producto ya no disponible
    /// devuelve el registro sin error.
    pub async fn mark_unavailable(&self, id: &str) -> RepoResult<Option<Producto>> {
        let producto = make_thing(TABLE, id);
        let mut result = self
            .base
            .db()
            .query("UPDATE $producto SET disponible = false RETURN AFTER")
            .bind(("producto", producto))
            .await?;
        let borrados: Vec<Producto> = result.take(0)?;
        Ok(borrados.into_iter().next())
    }
}
