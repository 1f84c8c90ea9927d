use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn list_catalog_applies_category_and_search() {
    let state = test_app_state();
    let query = CatalogQuery { category: Some("Headwear".into()), q: Some("winter".into()), ..CatalogQuery::default() };
    let Json(page) = list_catalog(State(state), Query(query)).await;
    assert!(page.total > 0);
    assert!(page.items.iter().all(|i| i.category == "Headwear"));
    assert!(page.items.iter().all(|i| {
        let needle = "winter";
        i.name.to_lowercase().contains(needle)
            || i.description.to_lowercase().contains(needle)
            || i.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }));
}

#[tokio::test]
async fn list_catalog_paginates() {
    let state = test_app_state();
    let total = state.content.catalog.len();
    let query = CatalogQuery { per_page: Some(5), page: Some(2), ..CatalogQuery::default() };
    let Json(page) = list_catalog(State(state.clone()), Query(query)).await;
    assert_eq!(page.total, total);
    assert_eq!(page.items.first().map(|i| i.id.as_str()), Some(state.content.catalog[5].id.as_str()));
}

#[tokio::test]
async fn get_item_missing_is_404() {
    let state = test_app_state();
    let err = get_item(State(state), Path("does-not-exist".into())).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quick_view_uses_viewport_width() {
    let state = test_app_state();
    let id = state.content.catalog[1].id.clone();
    let query = QuickViewQuery { viewport_width: Some(800), ..QuickViewQuery::default() };
    let Json(resp) = quick_view(State(state), Path(id.clone()), Query(query)).await.unwrap();
    assert_eq!(resp.item.id, id);
    assert_eq!(resp.index, 1);
    assert_eq!(resp.placement.columns, 2);
    assert_eq!(resp.placement.insert_after, 1);
}

#[tokio::test]
async fn quick_view_item_filtered_out_is_404() {
    let state = test_app_state();
    let mug = state
        .content
        .catalog
        .iter()
        .find(|i| i.category == "Drinkware")
        .map(|i| i.id.clone())
        .unwrap();
    let query = QuickViewQuery { category: Some("Apparel".into()), ..QuickViewQuery::default() };
    let err = quick_view(State(state), Path(mug), Query(query)).await.err();
    assert_eq!(err, Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn quick_view_zero_columns_is_400() {
    let state = test_app_state();
    let id = state.content.catalog[0].id.clone();
    let query = QuickViewQuery { columns: Some(0), ..QuickViewQuery::default() };
    let err = quick_view(State(state), Path(id), Query(query)).await.err();
    assert_eq!(err, Some(StatusCode::BAD_REQUEST));
}

#[test]
fn error_mapping() {
    assert_eq!(catalog_error_to_status(CatalogError::NotFound("x".into())), StatusCode::NOT_FOUND);
    assert_eq!(quick_view_error_to_status(QuickViewError::NoColumns), StatusCode::BAD_REQUEST);
}
