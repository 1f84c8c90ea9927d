use super::*;
use crate::db::MemoryPurchaseOrderStore;

fn new_order(po_number: &str) -> NewPurchaseOrder {
    NewPurchaseOrder {
        po_number: po_number.into(),
        vendor: "Blank Supply Co.".into(),
        lines: vec![
            NewPoLine { sku: "TEE-M".into(), description: "Tee M".into(), ordered_qty: 10 },
            NewPoLine { sku: "TEE-L".into(), description: "Tee L".into(), ordered_qty: 5 },
        ],
    }
}

fn receipt(sku: &str, qty: u32) -> Receipt {
    Receipt { sku: sku.into(), qty }
}

fn epoch() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

#[test]
fn new_order_starts_open_and_unreceived() {
    let order = new_order(" PO-1 ").into_order(epoch()).unwrap();
    assert_eq!(order.po_number, "PO-1");
    assert_eq!(order.status, PoStatus::Open);
    assert!(order.lines.iter().all(|l| l.received_qty == 0));
    assert_eq!(order.created_at, order.updated_at);
}

#[test]
fn new_order_validation() {
    let mut blank_vendor = new_order("PO-1");
    blank_vendor.vendor = "   ".into();
    assert!(matches!(blank_vendor.into_order(epoch()), Err(PurchaseOrderError::Invalid(_))));

    let mut no_lines = new_order("PO-1");
    no_lines.lines.clear();
    assert!(matches!(no_lines.into_order(epoch()), Err(PurchaseOrderError::Invalid(_))));

    let mut zero_qty = new_order("PO-1");
    zero_qty.lines[0].ordered_qty = 0;
    assert!(matches!(zero_qty.into_order(epoch()), Err(PurchaseOrderError::Invalid(_))));

    let mut dup_sku = new_order("PO-1");
    dup_sku.lines[1].sku = "TEE-M".into();
    assert!(matches!(dup_sku.into_order(epoch()), Err(PurchaseOrderError::Invalid(_))));

    assert!(matches!(new_order("").into_order(epoch()), Err(PurchaseOrderError::Invalid(_))));
}

#[test]
fn receiving_walks_status_to_received() {
    let mut order = new_order("PO-1").into_order(epoch()).unwrap();
    let later = epoch() + time::Duration::hours(1);

    order.receive(&[receipt("TEE-M", 4)], later).unwrap();
    assert_eq!(order.status, PoStatus::PartiallyReceived);
    assert_eq!(order.updated_at, later);

    order.receive(&[receipt("TEE-M", 6), receipt("TEE-L", 5)], later).unwrap();
    assert_eq!(order.status, PoStatus::Received);
}

#[test]
fn receipts_for_the_same_sku_accumulate() {
    let mut order = new_order("PO-1").into_order(epoch()).unwrap();
    order.receive(&[receipt("TEE-L", 2), receipt("TEE-L", 3)], epoch()).unwrap();
    assert_eq!(order.lines[1].received_qty, 5);
}

#[test]
fn over_receipt_is_all_or_nothing() {
    let mut order = new_order("PO-1").into_order(epoch()).unwrap();
    let before = order.clone();

    let err = order
        .receive(&[receipt("TEE-M", 3), receipt("TEE-L", 6)], epoch() + time::Duration::minutes(5))
        .unwrap_err();
    assert!(matches!(err, PurchaseOrderError::OverReceipt { ref sku, ordered: 5, received: 0, attempted: 6 } if sku == "TEE-L"));
    assert_eq!(order, before);
}

#[test]
fn unknown_sku_and_zero_qty_are_rejected() {
    let mut order = new_order("PO-1").into_order(epoch()).unwrap();
    assert!(matches!(
        order.receive(&[receipt("HAT", 1)], epoch()),
        Err(PurchaseOrderError::UnknownSku(ref s)) if s == "HAT"
    ));
    assert!(matches!(order.receive(&[receipt("TEE-M", 0)], epoch()), Err(PurchaseOrderError::Invalid(_))));
    assert!(matches!(order.receive(&[], epoch()), Err(PurchaseOrderError::Invalid(_))));
}

#[test]
fn derive_status_cases() {
    let line = |ordered_qty, received_qty| PoLine { sku: "S".into(), description: String::new(), ordered_qty, received_qty };
    assert_eq!(derive_status(&[line(5, 0), line(2, 0)]), PoStatus::Open);
    assert_eq!(derive_status(&[line(5, 5), line(2, 0)]), PoStatus::PartiallyReceived);
    assert_eq!(derive_status(&[line(5, 5), line(2, 2)]), PoStatus::Received);
}

#[test]
fn status_counts_include_zero_buckets() {
    let orders = demo_orders(epoch());
    let counts = status_counts(&orders);
    assert_eq!(counts[&PoStatus::Open], 1);
    assert_eq!(counts[&PoStatus::PartiallyReceived], 1);
    assert_eq!(counts[&PoStatus::Received], 1);

    let empty = status_counts(&[]);
    assert_eq!(empty.len(), 3);
    assert!(empty.values().all(|&n| n == 0));
}

#[test]
fn order_json_uses_snake_case_status_and_rfc3339() {
    let order = new_order("PO-1").into_order(epoch()).unwrap();
    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["status"], "open");
    assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
    let back: PurchaseOrder = serde_json::from_value(json).unwrap();
    assert_eq!(back, order);
}

#[tokio::test]
async fn create_and_receive_through_store() {
    let store = MemoryPurchaseOrderStore::default();
    let created = create_order(&store, new_order("PO-7")).await.unwrap();

    let received = receive_order(&store, created.id, &[receipt("TEE-M", 10)]).await.unwrap();
    assert_eq!(received.status, PoStatus::PartiallyReceived);

    let stored = store.get(created.id).await.unwrap();
    assert_eq!(stored.lines[0].received_qty, 10);
}

#[tokio::test]
async fn failed_receive_does_not_touch_store() {
    let store = MemoryPurchaseOrderStore::default();
    let created = create_order(&store, new_order("PO-8")).await.unwrap();

    let err = receive_order(&store, created.id, &[receipt("TEE-L", 99)]).await;
    assert!(matches!(err, Err(PurchaseOrderError::OverReceipt { .. })));
    assert_eq!(store.get(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn duplicate_po_number_is_rejected() {
    let store = MemoryPurchaseOrderStore::default();
    create_order(&store, new_order("PO-9")).await.unwrap();
    let err = create_order(&store, new_order("PO-9")).await;
    assert!(matches!(err, Err(PurchaseOrderError::DuplicatePoNumber(ref n)) if n == "PO-9"));
}

#[tokio::test]
async fn receive_unknown_order_is_not_found() {
    let store = MemoryPurchaseOrderStore::default();
    let id = Uuid::new_v4();
    let err = receive_order(&store, id, &[receipt("X", 1)]).await;
    assert!(matches!(err, Err(PurchaseOrderError::NotFound(missing)) if missing == id));
}

#[tokio::test]
async fn memory_store_lists_oldest_first() {
    let now = epoch();
    let mut orders = demo_orders(now);
    orders[0].created_at = now + time::Duration::days(2);
    let expected_last = orders[0].po_number.clone();
    let store = MemoryPurchaseOrderStore::with_orders(orders);

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed.last().unwrap().po_number, expected_last);
}
