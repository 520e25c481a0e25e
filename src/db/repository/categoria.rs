//! Categoria Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Categoria, CategoriaFull};

const TABLE: &str = "categoria";
const USUARIO_TABLE: &str = "usuario";

#[derive(Clone)]
pub struct CategoriaRepository {
    base: BaseRepository,
}

impl CategoriaRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all categories ordered by descripcion, creator expanded
    pub async fn find_all(&self) -> RepoResult<Vec<CategoriaFull>> {
        let categorias: Vec<CategoriaFull> = self
            .base
            .db()
            .query("SELECT * FROM categoria ORDER BY descripcion ASC FETCH usuario")
            .await?
            .take(0)?;
        Ok(categorias)
    }

    /// Global count of categories (no filter)
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM categoria GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Find category by id (raw record, no expansion)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Categoria>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let categoria: Option<Categoria> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(categoria)
    }

    /// Create a new category owned by `usuario_id`
    pub async fn create(&self, descripcion: String, usuario_id: &str) -> RepoResult<Option<Categoria>> {
        let usuario = make_thing(USUARIO_TABLE, usuario_id);
        let mut result = self
            .base
            .db()
            .query("CREATE categoria SET descripcion = $descripcion, usuario = $usuario")
            .bind(("descripcion", descripcion))
            .bind(("usuario", usuario))
            .await?;
        let creadas: Vec<Categoria> = result.take(0)?;
        Ok(creadas.into_iter().next())
    }

    /// Full replace: descripcion AND owner.
    ///
    /// La categoría pasa a ser del usuario que la actualiza; los clientes
    /// del API dependen de ese comportamiento.
    pub async fn update(
        &self,
        id: &str,
        descripcion: String,
        usuario_id: &str,
    ) -> RepoResult<Option<Categoria>> {
        let categoria = make_thing(TABLE, id);
        let usuario = make_thing(USUARIO_TABLE, usuario_id);

        // UPDATE sobre un id concreto no crea el registro si falta
        let mut result = self
            .base
            .db()
            .query("UPDATE $categoria SET descripcion = $descripcion, usuario = $usuario RETURN AFTER")
            .bind(("categoria", categoria))
            .bind(("descripcion", descripcion))
            .bind(("usuario", usuario))
            .await?;
        let actualizadas: Vec<Categoria> = result.take(0)?;
        Ok(actualizadas.into_iter().next())
    }

    /// Hard delete. Returns the removed record, or None if the id does not exist
    pub async fn delete(&self, id: &str) -> RepoResult<Option<Categoria>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let borrada: Option<Categoria> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(borrada)
    }
}
