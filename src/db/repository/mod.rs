//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables.

pub mod categoria;
pub mod producto;

// Re-exports
pub use categoria::CategoriaRepository;
pub use producto::ProductoRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Construye un id de registro para `table`; acepta la clave con o sin
/// prefijo de tabla ("categoria:abc" y "abc" son equivalentes)
pub(crate) fn make_thing(table: &str, id: &str) -> Thing {
    Thing::from((table, strip_table_prefix(table, id)))
}

/// Extract pure id if it contains table prefix (e.g., "categoria:xxx" -> "xxx")
pub(crate) fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_table_prefix() {
        assert_eq!(strip_table_prefix("categoria", "categoria:abc"), "abc");
        assert_eq!(strip_table_prefix("categoria", "abc"), "abc");
        // otro prefijo no se toca
        assert_eq!(strip_table_prefix("categoria", "producto:abc"), "producto:abc");
    }

    #[test]
    fn test_make_thing() {
        assert_eq!(make_thing("producto", "abc").to_string(), "producto:abc");
        assert_eq!(make_thing("producto", "producto:abc").to_string(), "producto:abc");
    }
}
