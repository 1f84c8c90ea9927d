use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::PurchaseOrderStore;
use crate::services::purchase_order::{PurchaseOrder, PurchaseOrderError};

/// Orders stored as JSONB blobs in `purchase_orders.payload`.
pub struct PgPurchaseOrderStore {
    pool: PgPool,
}

impl PgPurchaseOrderStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn decode(row: &sqlx::postgres::PgRow) -> Result<PurchaseOrder, PurchaseOrderError> {
    let payload: Json<PurchaseOrder> = row
        .try_get("payload")
        .map_err(|e| PurchaseOrderError::Corrupt(e.to_string()))?;
    Ok(payload.0)
}

fn map_insert_error(err: sqlx::Error, po_number: &str) -> PurchaseOrderError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            PurchaseOrderError::DuplicatePoNumber(po_number.to_owned())
        }
        _ => PurchaseOrderError::Database(err),
    }
}

#[async_trait::async_trait]
impl PurchaseOrderStore for PgPurchaseOrderStore {
    async fn list(&self) -> Result<Vec<PurchaseOrder>, PurchaseOrderError> {
        let rows = sqlx::query("SELECT payload FROM purchase_orders ORDER BY created_at, po_number")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(decode).collect()
    }

    async fn get(&self, id: Uuid) -> Result<PurchaseOrder, PurchaseOrderError> {
        let row = sqlx::query("SELECT payload FROM purchase_orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(PurchaseOrderError::NotFound(id))?;
        decode(&row)
    }

    async fn insert(&self, order: &PurchaseOrder) -> Result<(), PurchaseOrderError> {
        sqlx::query("INSERT INTO purchase_orders (id, po_number, payload) VALUES ($1, $2, $3)")
            .bind(order.id)
            .bind(&order.po_number)
            .bind(Json(order))
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, &order.po_number))?;
        Ok(())
    }

    async fn save(&self, order: &PurchaseOrder) -> Result<(), PurchaseOrderError> {
        let result = sqlx::query("UPDATE purchase_orders SET payload = $2, updated_at = now() WHERE id = $1")
            .bind(order.id)
            .bind(Json(order))
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PurchaseOrderError::NotFound(order.id));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
