//! # tavutin
//!
//! Rule-based soft hyphenation for Finnish text.
//!
//! Soft hyphens (U+00AD) are inserted at syllable boundaries so that a
//! browser or other renderer can break long words across lines. Plain text
//! and HTML fragments are both accepted; in HTML only text content is
//! touched, never tags, attributes, comments or shortcodes.
//!
//! ## Quick Start
//!
//! ```
//! use tavutin::hyphenate_document;
//!
//! let html = hyphenate_document("<p>kirjoituskone</p>");
//! assert_eq!(html, "<p>kir\u{AD}joi\u{AD}tus\u{AD}ko\u{AD}ne</p>");
//!
//! // Already hyphenated text comes back unchanged.
//! assert_eq!(hyphenate_document(&html), html);
//! ```
//!
//! ## Rules
//!
//! A break goes before every consonant that is followed by a vowel, provided
//! the two characters before the break are Finnish letters. See
//! [`syllable`] for the details.
//!
//! ## Hosting
//!
//! The [`filter`] module adds what a publishing host needs around the core:
//! a Finnish locale check, per-channel switches and a result cache.

pub mod cache;
pub mod document;
pub mod error;
pub mod filter;
pub mod shortcode;
pub mod syllable;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use document::{Fragment, Hyphenator, HyphenatorOptions, SoftHyphen};
pub use error::{Error, Result};
pub use syllable::{break_positions, hyphenate_word};
pub use util::decode_utf8;

/// Hyphenate plain text or an HTML fragment with default options.
pub fn hyphenate_document(text: &str) -> String {
    Hyphenator::default().hyphenate(text)
}

/// Hyphenate UTF-8 encoded bytes with default options.
///
/// Fails with [`Error::Encoding`] rather than guessing when the bytes are not
/// valid UTF-8.
pub fn hyphenate_bytes(bytes: &[u8]) -> Result<String> {
    let text = util::decode_utf8(bytes)?;
    Ok(hyphenate_document(text))
}
