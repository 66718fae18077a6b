//! Catalog - id index plus fuzzy name search

use super::error::{CatalogError, CatalogResult};
use crate::fuzzy::{FuzzyMatcher, MatcherConfig};
use ahash::{AHashMap, AHasher};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use tracing::debug;

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

/// A named catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// Alternative names, tried after `name`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub matcher: MatcherConfig,
    /// Catalogs at least this large are scanned in parallel when the
    /// `parallel` feature is enabled (default: 1000)
    pub parallel_threshold: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherConfig::default(),
            parallel_threshold: 1000,
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> CatalogResult<()> {
        if self.parallel_threshold == 0 {
            return Err(CatalogError::InvalidConfig(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Item catalog with exact id lookup and fuzzy name search.
///
/// On native with the `parallel` feature, uses rayon for large catalogs.
/// On WASM, scans sequentially.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    by_id: AHashMap<String, usize>,
    index_hash: String,
    matcher: FuzzyMatcher,
    config: CatalogConfig,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;
        Ok(Self {
            items: Vec::new(),
            by_id: AHashMap::new(),
            index_hash: String::new(),
            matcher: FuzzyMatcher::with_config(config.matcher),
            config,
        })
    }

    /// Create a catalog holding `items`
    pub fn with_items(config: CatalogConfig, items: Vec<CatalogItem>) -> CatalogResult<Self> {
        let mut catalog = Self::new(config)?;
        catalog.rebuild(items)?;
        Ok(catalog)
    }

    /// Create a catalog from a JSON array of items
    pub fn from_json(config: CatalogConfig, json: &str) -> CatalogResult<Self> {
        let items: Vec<CatalogItem> =
            serde_json::from_str(json).map_err(|e| CatalogError::Serialization(e.to_string()))?;
        Self::with_items(config, items)
    }

    /// Replace the catalog contents. Item order is kept.
    /// Returns (item_count, hash). On error the catalog is left unchanged.
    pub fn rebuild(&mut self, items: Vec<CatalogItem>) -> CatalogResult<(usize, String)> {
        let mut by_id = AHashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if by_id.insert(item.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        let hash = compute_hash(&items);
        let count = items.len();

        self.items = items;
        self.by_id = by_id;
        self.index_hash = hash.clone();

        debug!(items = count, hash = %hash, "catalog rebuilt");
        Ok((count, hash))
    }

    /// Position of the item with this exact id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Item with this exact id
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.index_of(id).map(|idx| &self.items[idx])
    }

    /// Resolve a search term.
    ///
    /// An item whose id equals the term is returned alone. Otherwise every
    /// item whose name or alias covers the term is returned, in catalog order.
    pub fn find_items(&self, search_term: &str) -> Vec<&CatalogItem> {
        if let Some(item) = self.get(search_term) {
            return vec![item];
        }
        self.match_items(search_term)
    }

    /// Match against items - parallel on native, sequential on WASM
    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    fn match_items(&self, search_term: &str) -> Vec<&CatalogItem> {
        if self.items.len() >= self.config.parallel_threshold {
            self.items
                .par_iter()
                .filter(|item| self.item_matches(item, search_term))
                .collect()
        } else {
            self.match_sequential(search_term)
        }
    }

    /// Sequential matching (WASM or when parallel feature disabled)
    #[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
    fn match_items(&self, search_term: &str) -> Vec<&CatalogItem> {
        self.match_sequential(search_term)
    }

    fn match_sequential(&self, search_term: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| self.item_matches(item, search_term))
            .collect()
    }

    fn item_matches(&self, item: &CatalogItem, search_term: &str) -> bool {
        item.names()
            .any(|name| self.matcher.is_match(name, search_term))
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get current index hash
    pub fn index_hash(&self) -> &str {
        &self.index_hash
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

fn compute_hash(items: &[CatalogItem]) -> String {
    let mut hasher = AHasher::default();
    for item in items {
        item.id.hash(&mut hasher);
        item.name.hash(&mut hasher);
        item.aliases.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}
