//! Word-level phrase matching
//!
//! Decides whether every word of a candidate phrase (typically user input)
//! finds a home in a reference phrase, allowing a few edits per word and
//! letting consecutive words on either side group into windows. "cheese
//! burgers" covers "cheeseburger"; "caesar salad with grilled chicken"
//! covers "chicken salad". The relation is asymmetric: the reference does
//! not have to be covered by the candidate.
//!
//! The scan is greedy and never backtracks. Once a window matches, earlier
//! partial accumulation is thrown away, so unusual word orders can produce
//! false negatives that an optimal assignment would avoid. That is fine for
//! menu-length phrases and is kept as is.

use crate::distance::levenshtein_distance;

/// An ordered sequence of whitespace-free, non-empty tokens borrowed from a
/// source string. Duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Phrase<'a> {
    /// Split `text` on whitespace.
    pub fn parse(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace().collect(),
        }
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// How many of this phrase's words are covered by `reference`.
    ///
    /// `self` is the candidate. For each candidate word, reference words are
    /// scanned left to right while two windows grow: the candidate words
    /// accumulated since the last match, and the reference words seen so far
    /// in this scan. The first of these checks to pass ends the scan:
    ///
    /// 1. word vs word, `d < tolerance`
    /// 2. candidate window vs reference word, `d < tolerance + |window|`
    /// 3. candidate word vs reference window, `d < tolerance + |window|`
    /// 4. window vs window, `d < tolerance + max(|window1|, |window2|)`
    ///
    /// Window checks only apply to windows of more than one word. The extra
    /// allowance absorbs the joining spaces.
    pub fn coverage_by(&self, reference: &Phrase<'_>, tolerance: usize) -> PhraseMatch {
        let total = self.len();

        if self.len() == 1 && reference.len() == 1 {
            let covered = levenshtein_distance(reference.tokens[0], self.tokens[0]) < tolerance;
            return PhraseMatch {
                covered: usize::from(covered),
                total,
            };
        }

        let mut covered = 0;
        let mut window1 = Window::default();

        for &word in &self.tokens {
            window1.push(word);
            let mut window2 = Window::default();

            for &ref_word in &reference.tokens {
                window2.push(ref_word);

                let consumed = if levenshtein_distance(word, ref_word) < tolerance {
                    1
                } else if window1.is_wide()
                    && levenshtein_distance(window1.text(), ref_word)
                        < tolerance.saturating_add(window1.len())
                {
                    window1.len()
                } else if window2.is_wide()
                    && levenshtein_distance(word, window2.text())
                        < tolerance.saturating_add(window2.len())
                {
                    1
                } else if window1.is_wide()
                    && window2.is_wide()
                    && levenshtein_distance(window1.text(), window2.text())
                        < tolerance.saturating_add(window1.len().max(window2.len()))
                {
                    window1.len()
                } else {
                    0
                };

                if consumed > 0 {
                    covered += consumed;
                    window1.clear();
                    break;
                }
            }
        }

        PhraseMatch { covered, total }
    }
}

/// Outcome of a phrase comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    /// Candidate words that found a home in the reference
    pub covered: usize,
    /// Candidate word count
    pub total: usize,
}

impl PhraseMatch {
    /// True when every candidate word was covered.
    pub fn is_match(&self) -> bool {
        self.covered == self.total
    }
}

/// Does `reference` cover every word of `candidate` within `tolerance`?
///
/// ```rust
/// use phrasefuzz_core::{phrase_match, Phrase};
///
/// let reference = Phrase::parse("cheese burgers");
/// assert!(phrase_match(&reference, &Phrase::parse("cheeseburger"), 2));
/// assert!(!phrase_match(&Phrase::parse("burger"), &Phrase::parse("cheeseburger"), 2));
/// ```
pub fn phrase_match(reference: &Phrase<'_>, candidate: &Phrase<'_>, tolerance: usize) -> bool {
    candidate.coverage_by(reference, tolerance).is_match()
}

/// Consecutive words joined by single spaces, plus their count.
#[derive(Debug, Default)]
struct Window {
    text: String,
    words: usize,
}

impl Window {
    fn push(&mut self, word: &str) {
        if self.words > 0 {
            self.text.push(' ');
        }
        self.text.push_str(word);
        self.words += 1;
    }

    fn clear(&mut self) {
        self.text.clear();
        self.words = 0;
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn len(&self) -> usize {
        self.words
    }

    /// Spans more than one word
    fn is_wide(&self) -> bool {
        self.words > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(reference: &str, candidate: &str, tolerance: usize) -> bool {
        phrase_match(&Phrase::parse(reference), &Phrase::parse(candidate), tolerance)
    }

    #[test]
    fn test_parse_drops_empty_tokens() {
        let p = Phrase::parse("  grilled   chicken ");
        assert_eq!(p.tokens(), &["grilled", "chicken"]);
        assert_eq!(p.len(), 2);
        assert!(Phrase::parse("   ").is_empty());
    }

    #[test]
    fn test_single_words() {
        assert!(matches("burger", "burgr", 2));
        assert!(!matches("burger", "burgr", 1));
        assert!(!matches("burger", "cheeseburger", 2));
    }

    #[test]
    fn test_reference_window_covers_candidate_word() {
        assert!(matches("cheese burgers", "cheeseburger", 2));
    }

    #[test]
    fn test_candidate_window_covers_reference_word() {
        assert!(matches("cheeseburger", "cheese burger", 2));
    }

    #[test]
    fn test_candidate_window_covers_reference_window() {
        // Neither side's words line up alone; only the two-word spans do
        assert!(matches("hot dogbun", "hotdog bun", 2));
        let outcome = Phrase::parse("hotdog bun").coverage_by(&Phrase::parse("hot dogbun"), 2);
        assert_eq!(outcome, PhraseMatch { covered: 2, total: 2 });
    }

    #[test]
    fn test_huge_tolerance_saturates() {
        assert!(matches("hot dogbun", "hotdog bun", usize::MAX));
    }

    #[test]
    fn test_asymmetric_coverage() {
        assert!(matches("caesar salad with grilled chicken", "chicken salad", 2));
        assert!(!matches("chicken salad", "caesar salad with grilled chicken", 2));
    }

    #[test]
    fn test_coverage_counts() {
        let reference = Phrase::parse("chicken salad");
        let candidate = Phrase::parse("caesar salad with grilled chicken");
        let outcome = candidate.coverage_by(&reference, 2);
        assert_eq!(outcome.total, 5);
        assert_eq!(outcome.covered, 2);
        assert!(!outcome.is_match());
    }

    #[test]
    fn test_typo_in_each_word() {
        assert!(matches("grilled chicken sandwich", "griled chiken", 2));
    }

    #[test]
    fn test_window_resets_after_match() {
        let mut w = Window::default();
        w.push("a");
        assert!(!w.is_wide());
        w.push("b");
        assert_eq!(w.text(), "a b");
        assert!(w.is_wide());
        w.clear();
        assert_eq!(w.len(), 0);
        assert_eq!(w.text(), "");
    }
}
