//! Database Module
//!
//! Embedded SurrealDB storage (RocksDB engine) and the repository layer.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "cafe";
const DATABASE: &str = "cafe";

/// Abre la base de datos embebida en `db_dir/cafe.db`
pub async fn connect(db_dir: &Path) -> Result<Surreal<Db>, surrealdb::Error> {
    let db: Surreal<Db> = Surreal::new::<RocksDb>(db_dir.join("cafe.db")).await?;
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;

    tracing::info!("Database opened at {}", db_dir.display());

    Ok(db)
}
