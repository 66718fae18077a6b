//! Fuzzy phrase matching
//!
//! Decides whether a candidate phrase (user input) is contained in a
//! reference phrase (a catalog entry, a known keyword). Stages, in order:
//!
//! 1. Empty input never matches
//! 2. Normalize both sides: strip `()'"?!.` and lower-case
//! 3. Identical after normalization
//! 4. Negative tolerance: stop here (exact-normalized mode)
//! 5. Reference contains the candidate literally
//! 6. Either side blank after normalization: no match
//! 7. Either side has a digit: stop here, numbers must match exactly
//! 8. Word-level phrase match within tolerance
//! 9. If the whole strings are within twice the tolerance, stem every word
//!    and run the phrase match again; that result is final
//!
//! # Example
//!
//! ```rust
//! use phrasefuzz_core::fuzzy::{fuzzy_match, FuzzyMatcher, MatchOutcome};
//!
//! assert!(fuzzy_match("cheese burgers", "cheeseburger"));
//! assert!(!fuzzy_match("burger", "cheeseburger"));
//!
//! let matcher = FuzzyMatcher::new();
//! assert_eq!(matcher.explain("Item 1", "item 2"), MatchOutcome::DigitGuard);
//! ```

mod matcher;
mod normalize;

pub use matcher::{
    fuzzy_match, fuzzy_match_with_tolerance, FuzzyMatcher, MatchOutcome, MatcherConfig,
    DEFAULT_TOLERANCE,
};
pub use normalize::normalize;
