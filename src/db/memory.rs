use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::PurchaseOrderStore;
use crate::services::purchase_order::{PurchaseOrder, PurchaseOrderError};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryPurchaseOrderStore {
    orders: RwLock<HashMap<Uuid, PurchaseOrder>>,
}

impl MemoryPurchaseOrderStore {
    #[must_use]
    pub fn with_orders(orders: Vec<PurchaseOrder>) -> Self {
        Self { orders: RwLock::new(orders.into_iter().map(|o| (o.id, o)).collect()) }
    }
}

#[async_trait::async_trait]
impl PurchaseOrderStore for MemoryPurchaseOrderStore {
    async fn list(&self) -> Result<Vec<PurchaseOrder>, PurchaseOrderError> {
        let orders = self.orders.read().await;
        let mut out: Vec<PurchaseOrder> = orders.values().cloned().collect();
        out.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.po_number.cmp(&b.po_number)));
        Ok(out)
    }

    async fn get(&self, id: Uuid) -> Result<PurchaseOrder, PurchaseOrderError> {
        self.orders
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(PurchaseOrderError::NotFound(id))
    }

    async fn insert(&self, order: &PurchaseOrder) -> Result<(), PurchaseOrderError> {
        let mut orders = self.orders.write().await;
        if orders.values().any(|o| o.po_number == order.po_number) {
            return Err(PurchaseOrderError::DuplicatePoNumber(order.po_number.clone()));
        }
        orders.insert(order.id, order.clone());
        Ok(())
    }

    async fn save(&self, order: &PurchaseOrder) -> Result<(), PurchaseOrderError> {
        let mut orders = self.orders.write().await;
        let Some(slot) = orders.get_mut(&order.id) else {
            return Err(PurchaseOrderError::NotFound(order.id));
        };
        *slot = order.clone();
        Ok(())
    }
}
