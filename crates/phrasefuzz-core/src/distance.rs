//! Levenshtein edit distance
//!
//! Pure metric over raw strings. No case folding or punctuation handling
//! happens here; callers normalize first.

/// Compute the Levenshtein distance between two strings.
///
/// Counts the minimum number of single-character insertions, deletions and
/// substitutions needed to turn `a` into `b`. Characters are Unicode scalar
/// values, not bytes.
///
/// Two rolling rows sized to the shorter input keep memory at O(min(len)).
///
/// ```rust
/// use phrasefuzz_core::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Rows run along the shorter string, the outer loop walks the longer one
    let (longer, shorter, shorter_len) = if a_len >= b_len {
        (a, b, b_len)
    } else {
        (b, a, a_len)
    };
    let shorter: Vec<char> = shorter.chars().collect();

    let mut prev: Vec<usize> = (0..=shorter_len).collect();
    let mut curr: Vec<usize> = vec![0; shorter_len + 1];

    for (i, lc) in longer.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in shorter.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (curr[j] + 1) // insertion
                .min(prev[j + 1] + 1) // deletion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[shorter_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("burger", "burger"), 0);
    }

    #[test]
    fn test_empty_side() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
        assert_eq!(levenshtein_distance("cheese burgers", "cheeseburger"), 2);
        assert_eq!(levenshtein_distance("burger", "cheeseburger"), 6);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("kitten", "sitting"),
            ("salad", "caesar"),
            ("a", "abcdef"),
            ("grilled chicken", "chicken"),
        ];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("crème brûlée", "creme brulee"), 3);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(levenshtein_distance("Salad", "salad"), 1);
    }
}
