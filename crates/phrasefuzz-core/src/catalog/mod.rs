//! Catalog lookup
//!
//! Resolves a search term against a list of named items: an exact id hit
//! wins, otherwise every item whose name (or alias) covers the term under
//! fuzzy matching is returned in catalog order.
//!
//! # Example
//!
//! ```rust
//! use phrasefuzz_core::catalog::{Catalog, CatalogConfig, CatalogItem};
//!
//! let catalog = Catalog::with_items(
//!     CatalogConfig::default(),
//!     vec![
//!         CatalogItem::new("1", "Cheese Burgers"),
//!         CatalogItem::new("2", "Caesar Salad with Grilled Chicken"),
//!     ],
//! )
//! .unwrap();
//!
//! let found = catalog.find_items("chicken salad");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].id, "2");
//!
//! // Ids take precedence over names
//! assert_eq!(catalog.find_items("1")[0].name, "Cheese Burgers");
//! ```

mod error;
mod index;

pub use error::{CatalogError, CatalogResult};
pub use index::{Catalog, CatalogConfig, CatalogItem};
