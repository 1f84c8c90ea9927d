//! Purchase-order receiving.
//!
//! DESIGN
//! ======
//! Each order is a single JSON document. Status is never stored
//! independently of the lines: it is recomputed from ordered vs. received
//! quantities after every change. Receiving applies a batch of receipts
//! all-or-nothing against a copy of the lines.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::db::PurchaseOrderStore;

#[derive(Debug, thiserror::Error)]
pub enum PurchaseOrderError {
    #[error("purchase order not found: {0}")]
    NotFound(Uuid),
    #[error("invalid purchase order: {0}")]
    Invalid(String),
    #[error("purchase order number already exists: {0}")]
    DuplicatePoNumber(String),
    #[error("sku {0} is not on this purchase order")]
    UnknownSku(String),
    #[error("receiving {attempted} of {sku} would exceed the ordered quantity ({received}/{ordered} received)")]
    OverReceipt { sku: String, ordered: u32, received: u32, attempted: u32 },
    #[error("stored purchase order is unreadable: {0}")]
    Corrupt(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoStatus {
    Open,
    PartiallyReceived,
    Received,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoLine {
    pub sku: String,
    pub description: String,
    pub ordered_qty: u32,
    #[serde(default)]
    pub received_qty: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: Uuid,
    pub po_number: String,
    pub vendor: String,
    pub lines: Vec<PoLine>,
    pub status: PoStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPoLine {
    pub sku: String,
    #[serde(default)]
    pub description: String,
    pub ordered_qty: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPurchaseOrder {
    pub po_number: String,
    pub vendor: String,
    pub lines: Vec<NewPoLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Receipt {
    pub sku: String,
    pub qty: u32,
}

// =============================================================================
// PURE LOGIC
// =============================================================================

#[must_use]
pub fn derive_status(lines: &[PoLine]) -> PoStatus {
    if lines.iter().all(|l| l.received_qty == 0) {
        PoStatus::Open
    } else if lines.iter().all(|l| l.received_qty >= l.ordered_qty) {
        PoStatus::Received
    } else {
        PoStatus::PartiallyReceived
    }
}

impl NewPurchaseOrder {
    /// Validate and build a fresh, unreceived order.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for a blank number/vendor, no lines, a blank sku,
    /// a repeated sku, or a zero ordered quantity.
    pub fn into_order(self, now: OffsetDateTime) -> Result<PurchaseOrder, PurchaseOrderError> {
        let po_number = self.po_number.trim().to_owned();
        let vendor = self.vendor.trim().to_owned();
        if po_number.is_empty() {
            return Err(PurchaseOrderError::Invalid("po_number is required".into()));
        }
        if vendor.is_empty() {
            return Err(PurchaseOrderError::Invalid("vendor is required".into()));
        }
        if self.lines.is_empty() {
            return Err(PurchaseOrderError::Invalid("at least one line is required".into()));
        }

        let mut lines: Vec<PoLine> = Vec::with_capacity(self.lines.len());
        for line in self.lines {
            let sku = line.sku.trim().to_owned();
            if sku.is_empty() {
                return Err(PurchaseOrderError::Invalid("line sku is required".into()));
            }
            if line.ordered_qty == 0 {
                return Err(PurchaseOrderError::Invalid(format!("ordered_qty for {sku} must be positive")));
            }
            if lines.iter().any(|l| l.sku == sku) {
                return Err(PurchaseOrderError::Invalid(format!("sku {sku} appears more than once")));
            }
            lines.push(PoLine {
                sku,
                description: line.description.trim().to_owned(),
                ordered_qty: line.ordered_qty,
                received_qty: 0,
            });
        }

        Ok(PurchaseOrder {
            id: Uuid::new_v4(),
            po_number,
            vendor,
            status: derive_status(&lines),
            lines,
            created_at: now,
            updated_at: now,
        })
    }
}

impl PurchaseOrder {
    /// Apply a batch of receipts. Receipts for the same sku accumulate.
    /// On error the order is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for an empty batch or a zero quantity,
    /// `UnknownSku` for a sku not on the order, and `OverReceipt` if any
    /// line would end up above its ordered quantity.
    pub fn receive(&mut self, receipts: &[Receipt], now: OffsetDateTime) -> Result<(), PurchaseOrderError> {
        if receipts.is_empty() {
            return Err(PurchaseOrderError::Invalid("no receipts supplied".into()));
        }

        let mut lines = self.lines.clone();
        let index: HashMap<String, usize> = lines
            .iter()
            .enumerate()
            .map(|(i, l)| (l.sku.clone(), i))
            .collect();

        for receipt in receipts {
            let sku = receipt.sku.trim();
            if receipt.qty == 0 {
                return Err(PurchaseOrderError::Invalid(format!("receipt qty for {sku} must be positive")));
            }
            let Some(&i) = index.get(sku) else {
                return Err(PurchaseOrderError::UnknownSku(sku.to_owned()));
            };
            let line = &mut lines[i];
            let next = line.received_qty.saturating_add(receipt.qty);
            if next > line.ordered_qty {
                return Err(PurchaseOrderError::OverReceipt {
                    sku: line.sku.clone(),
                    ordered: line.ordered_qty,
                    received: line.received_qty,
                    attempted: receipt.qty,
                });
            }
            line.received_qty = next;
        }

        self.status = derive_status(&lines);
        self.lines = lines;
        self.updated_at = now;
        Ok(())
    }
}

#[must_use]
pub fn status_counts(orders: &[PurchaseOrder]) -> HashMap<PoStatus, usize> {
    let mut counts = HashMap::from([(PoStatus::Open, 0), (PoStatus::PartiallyReceived, 0), (PoStatus::Received, 0)]);
    for order in orders {
        *counts.entry(order.status).or_default() += 1;
    }
    counts
}

// =============================================================================
// STORE-BACKED OPERATIONS
// =============================================================================

pub async fn create_order(
    store: &dyn PurchaseOrderStore,
    new: NewPurchaseOrder,
) -> Result<PurchaseOrder, PurchaseOrderError> {
    let order = new.into_order(OffsetDateTime::now_utc())?;
    store.insert(&order).await?;
    tracing::info!(id = %order.id, po_number = %order.po_number, "purchase order created");
    Ok(order)
}

pub async fn receive_order(
    store: &dyn PurchaseOrderStore,
    id: Uuid,
    receipts: &[Receipt],
) -> Result<PurchaseOrder, PurchaseOrderError> {
    let mut order = store.get(id).await?;
    order.receive(receipts, OffsetDateTime::now_utc())?;
    store.save(&order).await?;
    tracing::info!(%id, status = ?order.status, "purchase order received");
    Ok(order)
}

/// Sample orders so the receiving screen has something to show.
#[must_use]
pub fn demo_orders(now: OffsetDateTime) -> Vec<PurchaseOrder> {
    let line = |sku: &str, description: &str, ordered_qty: u32, received_qty: u32| PoLine {
        sku: sku.into(),
        description: description.into(),
        ordered_qty,
        received_qty,
    };
    let build = |po_number: &str, vendor: &str, lines: Vec<PoLine>| PurchaseOrder {
        id: Uuid::new_v4(),
        po_number: po_number.into(),
        vendor: vendor.into(),
        status: derive_status(&lines),
        lines,
        created_at: now,
        updated_at: now,
    };

    vec![
        build(
            "PO-1001",
            "Blank Supply Co.",
            vec![
                line("TEE-BLK-M", "Classic Crew Tee, black, M", 120, 0),
                line("TEE-BLK-L", "Classic Crew Tee, black, L", 96, 0),
            ],
        ),
        build(
            "PO-1002",
            "Headwear Direct",
            vec![
                line("HAT-DAD-NVY", "Structured Dad Hat, navy", 200, 150),
                line("BEANIE-GRY", "Cuffed Beanie, heather grey", 150, 0),
            ],
        ),
        build("PO-1003", "Drinkware Works", vec![line("TUMBLER-20", "Insulated Tumbler 20 oz", 60, 60)]),
    ]
}

#[cfg(test)]
#[path = "purchase_order_test.rs"]
mod tests;
