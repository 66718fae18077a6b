//! Catalog scans on the rayon path
//!
//! Built only with the `parallel` feature:
//! `cargo test -p phrasefuzz-core --features parallel`

use phrasefuzz_core::catalog::{Catalog, CatalogConfig, CatalogItem};
use pretty_assertions::assert_eq;

fn menu(copies: usize) -> Vec<CatalogItem> {
    let mut items = Vec::with_capacity(copies * 3);
    for i in 0..copies {
        items.push(CatalogItem::new(format!("burger-{i}"), "Cheese Burgers"));
        items.push(CatalogItem::new(format!("salad-{i}"), "Garden Salad"));
        items.push(CatalogItem::new(format!("fries-{i}"), "Fries").with_alias("French Fries"));
    }
    items
}

fn ids<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a str> {
    catalog
        .find_items(term)
        .iter()
        .map(|item| item.id.as_str())
        .collect()
}

#[test]
fn test_parallel_scan_keeps_catalog_order() {
    let catalog = Catalog::with_items(CatalogConfig::default(), menu(1000)).unwrap();
    assert!(catalog.len() >= catalog.config().parallel_threshold);

    let found = ids(&catalog, "cheeseburger");
    let expected: Vec<String> = (0..1000).map(|i| format!("burger-{i}")).collect();
    assert_eq!(found, expected);
}

#[test]
fn test_parallel_and_sequential_scans_agree() {
    let items = menu(400);
    let parallel = Catalog::with_items(
        CatalogConfig {
            parallel_threshold: 1,
            ..Default::default()
        },
        items.clone(),
    )
    .unwrap();
    let sequential = Catalog::with_items(
        CatalogConfig {
            parallel_threshold: usize::MAX,
            ..Default::default()
        },
        items,
    )
    .unwrap();

    for term in ["cheeseburger", "french fry", "salad", "milkshake"] {
        assert_eq!(ids(&parallel, term), ids(&sequential, term), "term {term:?}");
    }
    assert_eq!(ids(&parallel, "french fry").len(), 400);
    assert!(ids(&parallel, "milkshake").is_empty());
}
