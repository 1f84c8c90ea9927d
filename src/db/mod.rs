//! Purchase-order storage and the Postgres pool.
//!
//! SYSTEM CONTEXT
//! ==============
//! Purchase orders are the only mutable records on the site. Each order is
//! kept as one JSON document. With `DATABASE_URL` set they live in a JSONB
//! column; otherwise an in-memory map stands in so the receiving screen
//! still works on a laptop.

mod memory;
mod postgres;

pub use memory::MemoryPurchaseOrderStore;
pub use postgres::PgPurchaseOrderStore;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::services::purchase_order::{PurchaseOrder, PurchaseOrderError};

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}

/// Storage seam for purchase orders.
#[async_trait::async_trait]
pub trait PurchaseOrderStore: Send + Sync {
    /// All orders, oldest first.
    async fn list(&self) -> Result<Vec<PurchaseOrder>, PurchaseOrderError>;

    async fn get(&self, id: Uuid) -> Result<PurchaseOrder, PurchaseOrderError>;

    /// Insert a new order. Fails with `DuplicatePoNumber` if the number is taken.
    async fn insert(&self, order: &PurchaseOrder) -> Result<(), PurchaseOrderError>;

    /// Overwrite an existing order. Fails with `NotFound` if it does not exist.
    async fn save(&self, order: &PurchaseOrder) -> Result<(), PurchaseOrderError>;
}
