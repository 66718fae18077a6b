//! Catalog lookup tests

use phrasefuzz_core::catalog::{Catalog, CatalogConfig, CatalogItem};
use phrasefuzz_core::MatcherConfig;

/// Helper to create a small menu
fn menu() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("1", "Cheese Burgers"),
        CatalogItem::new("2", "Caesar Salad with Grilled Chicken"),
        CatalogItem::new("3", "Pepperoni Pizza"),
        CatalogItem::new("4", "Item 1"),
        CatalogItem::new("5", "Item 2"),
        CatalogItem::new("6", "Fries").with_alias("French Fries"),
    ]
}

#[test]
fn test_search_by_name() {
    let catalog = Catalog::with_items(CatalogConfig::default(), menu()).unwrap();

    let found = catalog.find_items("cheeseburger");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "1");

    let found = catalog.find_items("peperoni");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "3");
}

#[test]
fn test_numeric_names_match_exactly() {
    let catalog = Catalog::with_items(CatalogConfig::default(), menu()).unwrap();

    let found = catalog.find_items("item 2");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "5");
}

#[test]
fn test_exact_only_catalog() {
    let config = CatalogConfig {
        matcher: MatcherConfig { tolerance: -1 },
        ..Default::default()
    };
    let catalog = Catalog::with_items(config, menu()).unwrap();

    assert!(catalog.find_items("cheeseburger").is_empty());
    assert_eq!(catalog.find_items("cheese burgers!")[0].id, "1");
}

#[test]
fn test_parallel_threshold_does_not_change_results() {
    let mut items = Vec::new();
    for i in 0..500 {
        items.push(CatalogItem::new(format!("burger-{i}"), "Cheese Burgers"));
        items.push(CatalogItem::new(format!("salad-{i}"), "Garden Salad"));
    }

    let sequential = Catalog::with_items(CatalogConfig::default(), items.clone()).unwrap();
    let parallel = Catalog::with_items(
        CatalogConfig {
            parallel_threshold: 1,
            ..Default::default()
        },
        items,
    )
    .unwrap();

    let a: Vec<&str> = sequential
        .find_items("cheeseburger")
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    let b: Vec<&str> = parallel
        .find_items("cheeseburger")
        .iter()
        .map(|item| item.id.as_str())
        .collect();

    assert_eq!(a.len(), 500);
    assert_eq!(a, b);
    assert_eq!(a[0], "burger-0");
    assert_eq!(a[499], "burger-499");
}

#[test]
fn test_config_roundtrip_defaults() {
    let config: CatalogConfig = serde_json::from_str(r#"{"matcher": {"tolerance": 3}}"#).unwrap();
    assert_eq!(config.matcher.tolerance, 3);
    assert_eq!(config.parallel_threshold, 1000);

    let config: CatalogConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, CatalogConfig::default());
}
