use super::*;

fn item(id: &str, category: &str, name: &str, tags: &[&str]) -> CatalogItem {
    CatalogItem {
        id: id.into(),
        name: name.into(),
        description: format!("{name} description"),
        category: category.into(),
        price_cents: 1000,
        image_url: format!("/{id}.jpg"),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}

fn sample() -> Vec<CatalogItem> {
    vec![
        item("tee", "Apparel", "Classic Tee", &["cotton"]),
        item("hoodie", "Apparel", "Fleece Hoodie", &["winter"]),
        item("beanie", "Headwear", "Cuffed Beanie", &["winter", "knit"]),
        item("mug", "Drinkware", "Ceramic Mug", &["office"]),
    ]
}

fn ids(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

#[test]
fn no_filters_returns_everything_in_order() {
    let items = sample();
    assert_eq!(ids(&filter_catalog(&items, None, None)), vec!["tee", "hoodie", "beanie", "mug"]);
}

#[test]
fn all_category_is_a_wildcard() {
    let items = sample();
    assert_eq!(filter_catalog(&items, Some("All"), None).len(), 4);
    assert_eq!(filter_catalog(&items, Some("  "), None).len(), 4);
}

#[test]
fn category_and_search_must_both_match() {
    let items = sample();
    let hits = filter_catalog(&items, Some("apparel"), Some("winter"));
    assert_eq!(ids(&hits), vec!["hoodie"]);
}

#[test]
fn search_checks_name_description_and_tags() {
    let items = sample();
    assert_eq!(ids(&filter_catalog(&items, None, Some("  MUG "))), vec!["mug"]);
    assert_eq!(ids(&filter_catalog(&items, None, Some("knit"))), vec!["beanie"]);
    assert_eq!(ids(&filter_catalog(&items, None, Some("hoodie description"))), vec!["hoodie"]);
}

#[test]
fn unknown_category_matches_nothing() {
    let items = sample();
    assert!(filter_catalog(&items, Some("Bags"), None).is_empty());
}

#[test]
fn paginate_defaults_and_totals() {
    let data: Vec<u32> = (1..=30).collect();
    let page = paginate(&data, None, None);
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, DEFAULT_PER_PAGE);
    assert_eq!(page.total, 30);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items, (1..=12).collect::<Vec<_>>());
}

#[test]
fn paginate_last_page_is_partial() {
    let data: Vec<u32> = (1..=30).collect();
    let page = paginate(&data, Some(3), None);
    assert_eq!(page.items, (25..=30).collect::<Vec<_>>());
}

#[test]
fn paginate_past_the_end_is_empty_with_totals() {
    let data: Vec<u32> = (1..=5).collect();
    let page = paginate(&data, Some(9), Some(2));
    assert!(page.items.is_empty());
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn paginate_clamps_page_and_per_page() {
    let data: Vec<u32> = (1..=100).collect();
    let zero = paginate(&data, Some(0), Some(0));
    assert_eq!(zero.page, 1);
    assert_eq!(zero.per_page, 1);
    assert_eq!(zero.items, vec![1]);

    let huge = paginate(&data, Some(1), Some(1000));
    assert_eq!(huge.per_page, MAX_PER_PAGE);
    assert_eq!(huge.items.len(), MAX_PER_PAGE);
}

#[test]
fn paginate_empty_input() {
    let data: Vec<u32> = Vec::new();
    let page = paginate(&data, None, None);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[test]
fn categories_are_distinct_and_sorted() {
    assert_eq!(categories(&sample()), vec!["Apparel", "Drinkware", "Headwear"]);
}

#[test]
fn find_item_reports_missing_id() {
    let items = sample();
    assert_eq!(find_item(&items, "mug").unwrap().name, "Ceramic Mug");
    assert_eq!(find_item(&items, "nope"), Err(CatalogError::NotFound("nope".into())));
}
