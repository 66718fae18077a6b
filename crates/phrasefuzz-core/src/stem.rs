//! Porter stemming
//!
//! Suffix stripping as described in Porter, 1980, "An algorithm for suffix
//! stripping", Program 14(3), 130-137, with the two departures that the
//! published reference vocabulary was produced with: step 2 maps "bli" to
//! "ble" and adds "logi" to "log".
//!
//! Input is expected to be lower case. Words shorter than three characters,
//! and words containing non-ASCII characters, are returned unchanged.

/// Step 1a plural endings, checked in order, first hit wins.
const STEP1A_RULES: &[(&str, &str)] = &[("sses", "ss"), ("ies", "i"), ("ss", "ss"), ("s", "")];

/// Step 2 double suffixes, applied when the stem has m > 0.
const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

/// Step 3 suffixes, applied when the stem has m > 0.
const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 suffixes, removed when the stem has m > 1.
/// "ion" additionally needs the stem to end in 's' or 't'.
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Stem a single word.
///
/// ```rust
/// use phrasefuzz_core::stem;
///
/// assert_eq!(stem("running"), "run");
/// assert_eq!(stem("caresses"), "caress");
/// assert_eq!(stem("generalization"), "gener");
/// ```
pub fn stem(word: &str) -> String {
    if word.len() < 3 || !word.is_ascii() {
        return word.to_string();
    }

    let mut w = Word::new(word);

    // A leading 'y' always acts as a consonant. Mark it so the vowel test
    // never sees it, and put it back once the rules have run.
    let leading_y = w.mark_leading_y();

    w.step1a();
    w.step1b();
    w.step1c();
    w.step2();
    w.step3();
    w.step4();
    w.step5();

    if leading_y {
        w.unmark_leading_y();
    }
    w.into_string()
}

/// Stem every whitespace-separated word of a phrase, joined by single spaces.
///
/// ```rust
/// use phrasefuzz_core::stem_all_words;
///
/// assert_eq!(stem_all_words("running dogs"), "run dog");
/// ```
pub fn stem_all_words(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(stem)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mutable ASCII buffer the rule steps operate on.
struct Word {
    b: Vec<u8>,
}

impl Word {
    fn new(word: &str) -> Self {
        Self {
            b: word.as_bytes().to_vec(),
        }
    }

    fn into_string(self) -> String {
        self.b.into_iter().map(char::from).collect()
    }

    fn mark_leading_y(&mut self) -> bool {
        match self.b.first_mut() {
            Some(first) if *first == b'y' => {
                *first = b'Y';
                true
            }
            _ => false,
        }
    }

    fn unmark_leading_y(&mut self) {
        if let Some(first) = self.b.first_mut() {
            *first = b'y';
        }
    }

    /// Is the letter at `i` a consonant? 'y' is a consonant at the start of
    /// the word or after a vowel.
    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Porter's measure m of the first `len` letters: the number of
    /// vowel-sequence to consonant-sequence transitions in [C](VC)^m[V].
    fn measure(&self, len: usize) -> usize {
        (1..len)
            .filter(|&i| !self.is_consonant(i - 1) && self.is_consonant(i))
            .count()
    }

    /// *v* - the first `len` letters contain a vowel.
    fn has_vowel(&self, len: usize) -> bool {
        (0..len).any(|i| !self.is_consonant(i))
    }

    /// *d - the first `len` letters end with a double consonant.
    fn ends_double_consonant(&self, len: usize) -> bool {
        len >= 2 && self.b[len - 1] == self.b[len - 2] && self.is_consonant(len - 1)
    }

    /// *o - the first `len` letters end consonant-vowel-consonant, where the
    /// final consonant is not w, x or y.
    fn ends_cvc(&self, len: usize) -> bool {
        len >= 3
            && self.is_consonant(len - 1)
            && !self.is_consonant(len - 2)
            && self.is_consonant(len - 3)
            && !matches!(self.b[len - 1], b'w' | b'x' | b'y')
    }

    /// Length of the stem left in front of `suffix`, if the word ends with it.
    fn stem_before(&self, suffix: &str) -> Option<usize> {
        self.b
            .ends_with(suffix.as_bytes())
            .then(|| self.b.len() - suffix.len())
    }

    fn replace_from(&mut self, stem_len: usize, replacement: &str) {
        self.b.truncate(stem_len);
        self.b.extend_from_slice(replacement.as_bytes());
    }

    fn last(&self) -> Option<u8> {
        self.b.last().copied()
    }

    fn step1a(&mut self) {
        for (suffix, replacement) in STEP1A_RULES {
            if let Some(stem_len) = self.stem_before(suffix) {
                self.replace_from(stem_len, replacement);
                return;
            }
        }
    }

    fn step1b(&mut self) {
        if let Some(stem_len) = self.stem_before("eed") {
            if self.measure(stem_len) > 0 {
                self.b.pop();
            }
            return;
        }

        let stem_len = match self
            .stem_before("ed")
            .or_else(|| self.stem_before("ing"))
        {
            Some(stem_len) if self.has_vowel(stem_len) => stem_len,
            _ => return,
        };
        self.b.truncate(stem_len);

        let len = self.b.len();
        if ["at", "bl", "iz"].iter().any(|s| self.b.ends_with(s.as_bytes())) {
            self.b.push(b'e');
        } else if self.ends_double_consonant(len)
            && !matches!(self.last(), Some(b'l' | b's' | b'z'))
        {
            self.b.pop();
        } else if self.measure(len) == 1 && self.ends_cvc(len) {
            self.b.push(b'e');
        }
    }

    fn step1c(&mut self) {
        if let Some(stem_len) = self.stem_before("y") {
            if self.has_vowel(stem_len) {
                self.replace_from(stem_len, "i");
            }
        }
    }

    fn step2(&mut self) {
        self.replace_suffix_if(STEP2_RULES, 0);
    }

    fn step3(&mut self) {
        self.replace_suffix_if(STEP3_RULES, 0);
    }

    /// Apply the first rule whose suffix matches, provided the stem measure
    /// exceeds `min_measure`. A matching suffix ends the step either way.
    fn replace_suffix_if(&mut self, rules: &[(&str, &str)], min_measure: usize) {
        for (suffix, replacement) in rules {
            if let Some(stem_len) = self.stem_before(suffix) {
                if self.measure(stem_len) > min_measure {
                    self.replace_from(stem_len, replacement);
                }
                return;
            }
        }
    }

    fn step4(&mut self) {
        for suffix in STEP4_SUFFIXES {
            let Some(stem_len) = self.stem_before(suffix) else {
                continue;
            };
            if *suffix == "ion" && !(stem_len > 0 && matches!(self.b[stem_len - 1], b's' | b't')) {
                continue;
            }
            if self.measure(stem_len) > 1 {
                self.b.truncate(stem_len);
            }
            return;
        }
    }

    fn step5(&mut self) {
        // 5a: drop a final 'e'
        if let Some(stem_len) = self.stem_before("e") {
            let m = self.measure(stem_len);
            if m > 1 || (m == 1 && !self.ends_cvc(stem_len)) {
                self.b.pop();
            }
        }

        // 5b: -ll becomes -l
        let len = self.b.len();
        if self.last() == Some(b'l') && self.ends_double_consonant(len) && self.measure(len) > 1 {
            self.b.pop();
        }
    }
}
