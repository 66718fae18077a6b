//! FuzzyMatcher - staged fuzzy phrase matching

use super::normalize::{contains_digit, contains_phrase, normalize};
use crate::distance::levenshtein_distance;
use crate::phrase::Phrase;
use crate::stem::stem_all_words;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Tolerance used when none is given. A tolerance of 0 also falls back to it.
pub const DEFAULT_TOLERANCE: i32 = 2;

/// Matcher configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Edit distance a single word may be off by (exclusive). Negative means
    /// exact match after normalization only; 0 means "use the default".
    pub tolerance: i32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Which stage decided a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// One side was empty, or blank after normalization and not otherwise matched
    EmptyInput,
    /// Identical after normalization
    Exact,
    /// Not identical and the tolerance asked for exact matching only
    ExactOnly,
    /// Reference contains the candidate verbatim
    Substring,
    /// Digits present, fuzzy matching refused
    DigitGuard,
    /// Every candidate word covered by the reference
    Phrase,
    /// Decided by the retry on stemmed words
    Stemmed { matched: bool },
    /// Phrase match failed and the strings are too far apart to retry
    TooDistant,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        match self {
            Self::Exact | Self::Substring | Self::Phrase => true,
            Self::Stemmed { matched } => *matched,
            Self::EmptyInput | Self::ExactOnly | Self::DigitGuard | Self::TooDistant => false,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty_input"),
            Self::Exact => write!(f, "exact"),
            Self::ExactOnly => write!(f, "exact_only"),
            Self::Substring => write!(f, "substring"),
            Self::DigitGuard => write!(f, "digit_guard"),
            Self::Phrase => write!(f, "phrase"),
            Self::Stemmed { matched: true } => write!(f, "stemmed"),
            Self::Stemmed { matched: false } => write!(f, "stemmed_no_match"),
            Self::TooDistant => write!(f, "too_distant"),
        }
    }
}

/// Stateless fuzzy matcher. Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher {
    config: MatcherConfig,
}

impl FuzzyMatcher {
    /// Create a matcher with the default tolerance
    pub fn new() -> Self {
        Self::with_config(MatcherConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Is `candidate` contained in `reference` at the configured tolerance?
    pub fn is_match(&self, reference: &str, candidate: &str) -> bool {
        self.explain(reference, candidate).is_match()
    }

    /// Run the match and report the deciding stage.
    pub fn explain(&self, reference: &str, candidate: &str) -> MatchOutcome {
        self.explain_with_tolerance(reference, candidate, self.config.tolerance)
    }

    /// Same as [`explain`](Self::explain) with an explicit tolerance.
    pub fn explain_with_tolerance(
        &self,
        reference: &str,
        candidate: &str,
        tolerance: i32,
    ) -> MatchOutcome {
        let outcome = decide(reference, candidate, tolerance);
        trace!(
            reference,
            candidate,
            tolerance,
            outcome = %outcome,
            "fuzzy match decided"
        );
        outcome
    }
}

fn decide(reference: &str, candidate: &str, tolerance: i32) -> MatchOutcome {
    if reference.is_empty() || candidate.is_empty() {
        return MatchOutcome::EmptyInput;
    }

    let reference = normalize(reference);
    let candidate = normalize(candidate);

    if reference == candidate {
        return MatchOutcome::Exact;
    }
    if tolerance < 0 {
        return MatchOutcome::ExactOnly;
    }

    if contains_phrase(&reference, &candidate) {
        return MatchOutcome::Substring;
    }

    // Nothing left to compare word by word
    if reference.trim().is_empty() || candidate.trim().is_empty() {
        return MatchOutcome::EmptyInput;
    }

    if contains_digit(&reference) || contains_digit(&candidate) {
        return MatchOutcome::DigitGuard;
    }

    let tolerance = usize::try_from(if tolerance == 0 {
        DEFAULT_TOLERANCE
    } else {
        tolerance
    })
    .unwrap_or(usize::MAX);

    if Phrase::parse(&candidate)
        .coverage_by(&Phrase::parse(&reference), tolerance)
        .is_match()
    {
        return MatchOutcome::Phrase;
    }

    // Close overall but not word-by-word: retry on stems. The stemmed
    // answer replaces the first one.
    if levenshtein_distance(&reference, &candidate) < tolerance.saturating_mul(2) {
        let reference = stem_all_words(&reference);
        let candidate = stem_all_words(&candidate);
        let matched = Phrase::parse(&candidate)
            .coverage_by(&Phrase::parse(&reference), tolerance)
            .is_match();
        return MatchOutcome::Stemmed { matched };
    }

    MatchOutcome::TooDistant
}

/// Fuzzy match at the default tolerance.
///
/// ```rust
/// use phrasefuzz_core::fuzzy_match;
///
/// assert!(fuzzy_match("caesar salad with grilled chicken", "chicken salad"));
/// assert!(!fuzzy_match("chicken salad", "caesar salad with grilled chicken"));
/// ```
pub fn fuzzy_match(reference: &str, candidate: &str) -> bool {
    fuzzy_match_with_tolerance(reference, candidate, DEFAULT_TOLERANCE)
}

/// Fuzzy match with an explicit tolerance. Negative means exact match after
/// normalization only; 0 falls back to [`DEFAULT_TOLERANCE`].
pub fn fuzzy_match_with_tolerance(reference: &str, candidate: &str, tolerance: i32) -> bool {
    FuzzyMatcher::new()
        .explain_with_tolerance(reference, candidate, tolerance)
        .is_match()
}
