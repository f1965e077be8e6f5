//! Syllable boundary analysis for Finnish words.
//!
//! A break is proposed before every consonant that is immediately followed by
//! a vowel (`kir-joi-tus-ko-ne`). A proposal is only accepted when the two
//! characters right before it, as they stand in the partially hyphenated
//! word, are both letters of the Finnish alphabet. That rule keeps a single
//! letter from being stranded at the start of a word, and it rejects any
//! break right after punctuation or after an existing soft hyphen.
//!
//! # Example
//!
//! ```
//! use tavutin::syllable::{break_positions, hyphenate_word};
//!
//! assert_eq!(break_positions("taivutus"), vec![3, 5]);
//! assert_eq!(hyphenate_word("taivutus", "-"), "tai-vu-tus");
//! ```

/// Vowels of the Finnish alphabet, lowercase.
pub const VOWELS: [char; 9] = ['a', 'e', 'i', 'o', 'u', 'y', 'å', 'ä', 'ö'];

/// Consonants recognised by the boundary rule, lowercase.
pub const CONSONANTS: [char; 20] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w',
    'x', 'z',
];

/// Minimum number of letters that must precede a break.
const MIN_PREFIX_LETTERS: usize = 2;

#[inline]
fn fold(c: char) -> char {
    // Every letter of the alphabet lowercases to a single char; anything that
    // expands (U+0130 → "i̇") is left as is and so matches nothing.
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Check whether `c` is a Finnish vowel, ignoring case.
#[inline]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&fold(c))
}

/// Check whether `c` is a consonant of the boundary rule, ignoring case.
#[inline]
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&fold(c))
}

/// Check whether `c` belongs to the combined consonant and vowel alphabet.
#[inline]
pub fn is_letter(c: char) -> bool {
    is_vowel(c) || is_consonant(c)
}

/// Candidate break offsets: the start of every consonant-vowel pair.
///
/// Pairs are matched leftmost-first and never overlap, so consecutive
/// candidates are at least two characters apart. Offsets are char indices.
pub fn candidates(word: &str) -> Vec<usize> {
    let chars: Vec<char> = word.chars().collect();
    let mut found = Vec::new();
    let mut i = 0;
    while i + 1 < chars.len() {
        if is_consonant(chars[i]) && is_vowel(chars[i + 1]) {
            found.push(i);
            i += 2;
        } else {
            i += 1;
        }
    }
    found
}

/// Incremental hyphenation buffer.
///
/// Characters of the word are copied in left to right and markers are pushed
/// between them as breaks are accepted, so every end-of-prefix check runs
/// against the text exactly as it will be emitted.
struct Builder<'m> {
    out: String,
    marker: &'m str,
}

impl<'m> Builder<'m> {
    fn new(capacity: usize, marker: &'m str) -> Self {
        Self {
            out: String::with_capacity(capacity),
            marker,
        }
    }

    /// True when the buffer ends in at least two alphabet letters.
    fn prefix_ends_in_letters(&self) -> bool {
        let mut tail = self.out.chars().rev();
        (0..MIN_PREFIX_LETTERS).all(|_| tail.next().is_some_and(is_letter))
    }

    /// Try to place a marker at the current end of the buffer.
    fn try_break(&mut self) -> bool {
        if self.prefix_ends_in_letters() {
            self.out.push_str(self.marker);
            true
        } else {
            false
        }
    }
}

/// Walk a word and call `on_break` with the char offset of every accepted
/// break, returning the word with `marker` inserted at those offsets.
fn walk(word: &str, marker: &str, mut on_break: impl FnMut(usize)) -> String {
    let candidates = candidates(word);
    let mut builder = Builder::new(word.len() + candidates.len() * marker.len(), marker);
    let mut chars = word.chars();
    let mut copied = 0;

    for candidate in candidates {
        builder.out.extend(chars.by_ref().take(candidate - copied));
        copied = candidate;
        if builder.try_break() {
            on_break(candidate);
        } else {
            tracing::trace!(word, candidate, "rejected break candidate");
        }
    }
    builder.out.extend(chars);
    builder.out
}

/// Accepted break offsets for `word`, in ascending order.
///
/// Each offset `p` means a soft hyphen goes between char `p - 1` and char `p`.
/// Offsets are always in `2..len - 1`; words shorter than four characters
/// never break.
///
/// # Examples
///
/// ```
/// use tavutin::syllable::break_positions;
///
/// assert_eq!(break_positions("kirjoituskone"), vec![3, 6, 9, 11]);
/// assert_eq!(break_positions("auto"), vec![2]);
/// assert!(break_positions("kuu").is_empty());
/// assert!(break_positions("").is_empty());
/// ```
pub fn break_positions(word: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    walk(word, "\u{AD}", |p| positions.push(p));
    positions
}

/// Insert `marker` at every accepted break of `word`.
///
/// # Examples
///
/// ```
/// use tavutin::syllable::hyphenate_word;
///
/// assert_eq!(hyphenate_word("Kirjoituskone", "|"), "Kir|joi|tus|ko|ne");
/// assert_eq!(hyphenate_word("ja", "|"), "ja");
/// ```
pub fn hyphenate_word(word: &str, marker: &str) -> String {
    walk(word, marker, |_| {})
}
