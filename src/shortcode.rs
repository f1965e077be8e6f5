//! Shortcode detection.
//!
//! A shortcode opens with `[` immediately followed by an identifier character
//! (`[gallery ids="1,2"]`, `[caption]`). Text carrying one is handed to a later
//! templating stage and must reach it byte-for-byte, so it is never hyphenated.

use memchr::{memchr_iter, memchr2_iter};

#[inline]
fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn opens_at(bytes: &[u8], at: usize) -> bool {
    bytes.get(at + 1).copied().is_some_and(is_ident_byte)
}

/// Byte offset of the first shortcode opening in `text`, if any.
pub fn find_shortcode(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    memchr_iter(b'[', bytes).find(|&at| opens_at(bytes, at))
}

/// Check whether `text` contains a shortcode opening anywhere.
///
/// # Examples
///
/// ```
/// use tavutin::shortcode::contains_shortcode;
///
/// assert!(contains_shortcode(r#"katso [gallery ids="1,2"]"#));
/// assert!(!contains_shortcode("[ ei lyhytkoodi ]"));
/// ```
pub fn contains_shortcode(text: &str) -> bool {
    find_shortcode(text).is_some()
}

/// `None` if no shortcode opens in `token`, otherwise whether the last one
/// opened is still unclosed at the end of the token.
fn leaves_open(token: &str) -> Option<bool> {
    let bytes = token.as_bytes();
    let mut opened = false;
    let mut inside = false;
    for at in memchr2_iter(b'[', b']', bytes) {
        match bytes[at] {
            b']' if inside => inside = false,
            b'[' if !inside && opens_at(bytes, at) => {
                inside = true;
                opened = true;
            }
            _ => {}
        }
    }
    opened.then_some(inside)
}

/// Mark the whitespace-split tokens that belong to a shortcode.
///
/// A token holding `[name` is protected. When it does not close the
/// shortcode itself, the tokens up to the first one holding `]` are
/// protected too. An opening that is never closed guards only its own token.
///
/// # Examples
///
/// ```
/// use tavutin::shortcode::protected_tokens;
///
/// let tokens = ["[gallery", "ids=\"1,2\"]", "puutarha"];
/// assert_eq!(protected_tokens(&tokens), vec![true, true, false]);
/// ```
pub fn protected_tokens(tokens: &[&str]) -> Vec<bool> {
    let mut protected = vec![false; tokens.len()];
    let mut i = 0;
    while i < tokens.len() {
        let Some(open) = leaves_open(tokens[i]) else {
            i += 1;
            continue;
        };
        protected[i] = true;
        i += 1;
        if !open {
            continue;
        }
        if let Some(offset) = tokens[i..].iter().position(|t| t.contains(']')) {
            protected[i..=i + offset].fill(true);
            i += offset + 1;
        }
    }
    protected
}
