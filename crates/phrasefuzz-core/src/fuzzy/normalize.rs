//! Input normalization and cheap pre-checks
//!
//! Platform-specific implementations:
//! - Native: SIMD substring via memchr
//! - WASM: Pure Rust fallback

/// Punctuation removed before comparing.
const STRIPPED_PUNCTUATION: [char; 7] = ['(', ')', '\'', '"', '?', '!', '.'];

/// Strip `()'"?!.` and lower-case.
///
/// ```rust
/// use phrasefuzz_core::fuzzy::normalize;
///
/// assert_eq!(normalize("Chef's \"Special\"!"), "chefs special");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Any ASCII digit anywhere in the string.
#[inline]
pub(crate) fn contains_digit(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
}

/// Literal substring containment, SIMD-accelerated via memchr
#[cfg(all(not(target_arch = "wasm32"), feature = "simd"))]
#[inline]
pub(crate) fn contains_phrase(haystack: &str, needle: &str) -> bool {
    memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}

/// Literal substring containment, pure Rust fallback
#[cfg(any(target_arch = "wasm32", not(feature = "simd")))]
#[inline]
pub(crate) fn contains_phrase(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}
