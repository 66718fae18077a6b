//! phrasefuzz Core Engine
//!
//! Fuzzy phrase containment for short, menu-length text: decide whether a
//! candidate phrase (what a user typed or said) is contained in a reference
//! phrase (a catalog entry, a known keyword) under edit-distance tolerance.
//! Pure functions only, no I/O, so it runs the same in the browser (WASM)
//! and natively.
//!
//! Layers, bottom-up:
//!
//! - [`distance`] - Levenshtein edit distance
//! - [`stem`](mod@stem) - Porter stemmer
//! - [`phrase`] - asymmetric word/window coverage between two phrases
//! - [`fuzzy`] - normalization, shortcuts, and the stemmed retry
//! - [`catalog`] - id lookup and fuzzy search over named items
//! - [`text`] - display-string cleanup helpers
//!
//! # Features
//!
//! - `native` - Enable all native optimizations (SIMD, parallel)
//! - `simd` - SIMD-accelerated substring search via memchr
//! - `parallel` - Parallel catalog scans via rayon for large catalogs
//!
//! # Example
//!
//! ```rust
//! use phrasefuzz_core::{fuzzy_match, fuzzy_match_with_tolerance, levenshtein_distance, stem_all_words};
//!
//! assert!(fuzzy_match("cheese burgers", "cheeseburger"));
//! assert!(!fuzzy_match("burger", "cheeseburger"));
//! assert!(!fuzzy_match_with_tolerance("large fries", "fries!", -1));
//!
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//! assert_eq!(stem_all_words("running dogs"), "run dog");
//! ```

pub mod catalog;
pub mod distance;
pub mod fuzzy;
pub mod phrase;
pub mod stem;
pub mod text;

// Re-export main types at crate root
pub use catalog::{Catalog, CatalogConfig, CatalogError, CatalogItem, CatalogResult};
pub use distance::levenshtein_distance;
pub use fuzzy::{
    fuzzy_match, fuzzy_match_with_tolerance, normalize, FuzzyMatcher, MatchOutcome,
    MatcherConfig, DEFAULT_TOLERANCE,
};
pub use phrase::{phrase_match, Phrase, PhraseMatch};
pub use stem::{stem, stem_all_words};
pub use text::{space_mixed_case, strip_html};
