//! Document walker: soft hyphenation of plain text and HTML fragments.
//!
//! Input is classified once per call. Plain text is split on whitespace and
//! every word is hyphenated. Markup is parsed with html5ever into an arena
//! DOM; only text nodes are rewritten and the fragment is serialized back
//! without the document scaffolding the parser adds around it.
//!
//! Breaks are first written as an internal placeholder character and turned
//! into the real soft hyphen as the very last step, so nothing in between
//! ever has to reason about an invisible character that is already there.
//!
//! # Example
//!
//! ```
//! use tavutin::{Hyphenator, HyphenatorOptions, SoftHyphen};
//!
//! let hyphenator = Hyphenator::new(HyphenatorOptions {
//!     soft_hyphen: SoftHyphen::Entity,
//! });
//! assert_eq!(
//!     hyphenator.hyphenate("<p class=\"kone\">kirjoituskone</p>"),
//!     "<p class=\"kone\">kir&shy;joi&shy;tus&shy;ko&shy;ne</p>"
//! );
//! ```

mod arena;
mod serialize;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute, NodeVisitor};
pub use serialize::{SerializableNode, serialize_children};

use std::borrow::Cow;

use html5ever::QualName;
use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use memchr::memchr_iter;

use crate::shortcode::{contains_shortcode, protected_tokens};
use crate::syllable::hyphenate_word;
use tree_sink::ArenaSink;

/// Stand-in for a break until the output is finalized (private use area).
const PLACEHOLDER: &str = "\u{E0AD}";

/// Elements whose text is code, styling or a form value, never prose.
const RAW_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "textarea"];

/// How an accepted break is written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoftHyphen {
    /// U+00AD SOFT HYPHEN as a literal character.
    #[default]
    Char,
    /// The HTML entity `&shy;`.
    ///
    /// Markup output written this way does not survive a second pass
    /// byte-for-byte: the parser decodes `&shy;` and the next pass writes
    /// it back as U+00AD. The breaks stay where they were.
    Entity,
}

impl SoftHyphen {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoftHyphen::Char => "\u{AD}",
            SoftHyphen::Entity => "&shy;",
        }
    }
}

/// Options for a [`Hyphenator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HyphenatorOptions {
    pub soft_hyphen: SoftHyphen,
}

/// Whether a top-level input carries markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Plain,
    Markup,
}

impl Fragment {
    /// Classify `text` by whether stripping tags would change it.
    ///
    /// A `<` opens a tag unless it is followed by whitespace, so `a < b` is
    /// plain while `a<b` and a trailing `<` are markup.
    pub fn classify(text: &str) -> Fragment {
        let bytes = text.as_bytes();
        let opens_tag = memchr_iter(b'<', bytes).any(|at| {
            bytes
                .get(at + 1)
                .is_none_or(|next| !next.is_ascii_whitespace())
        });
        if opens_tag {
            Fragment::Markup
        } else {
            Fragment::Plain
        }
    }
}

/// Finnish soft hyphenation over plain text or HTML fragments.
///
/// Holds only options; every call parses into its own tree, so a single
/// hyphenator can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hyphenator {
    options: HyphenatorOptions,
}

impl Hyphenator {
    pub fn new(options: HyphenatorOptions) -> Self {
        Self { options }
    }

    /// Insert soft hyphens into `text`.
    ///
    /// Never fails: malformed markup is parsed leniently and serialized on a
    /// best-effort basis.
    pub fn hyphenate(&self, text: &str) -> String {
        let fragment = Fragment::classify(text);
        let marked = match fragment {
            Fragment::Plain => hyphenate_plain(text),
            Fragment::Markup => hyphenate_markup(text),
        };
        tracing::debug!(?fragment, input_len = text.len(), "hyphenated");
        self.finalize(marked)
    }

    fn finalize(&self, marked: String) -> String {
        if marked.contains(PLACEHOLDER) {
            marked.replace(PLACEHOLDER, self.options.soft_hyphen.as_str())
        } else {
            marked
        }
    }
}

/// Plain path: split on whitespace runs, hyphenate, rejoin with single spaces.
///
/// Leading, trailing and repeated whitespace is not preserved here.
fn hyphenate_plain(text: &str) -> String {
    let tokens: Vec<&str> = text.split_ascii_whitespace().collect();
    let protected = protected_tokens(&tokens);
    let words: Vec<Cow<'_, str>> = tokens
        .iter()
        .zip(protected)
        .map(|(&word, protected)| {
            if protected {
                Cow::Borrowed(word)
            } else {
                Cow::Owned(hyphenate_word(word, PLACEHOLDER))
            }
        })
        .collect();
    words.join(" ")
}

/// Rewrite one text node, or `None` to leave it exactly as it is.
fn hyphenate_text_node(text: &str) -> Option<String> {
    if contains_shortcode(text) {
        tracing::trace!(text, "text node holds a shortcode, left untouched");
        return None;
    }

    let mut words = text.split_ascii_whitespace().peekable();
    words.peek()?;

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    if text.starts_with(' ') {
        out.push(' ');
    }
    for (i, word) in words.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&hyphenate_word(word, PLACEHOLDER));
    }
    if text.ends_with(' ') {
        out.push(' ');
    }
    Some(out)
}

/// Visitor rewriting the prose text nodes of a tree.
#[derive(Debug, Default)]
struct TextRewriter {
    rewritten: usize,
    skipped: usize,
}

impl NodeVisitor for TextRewriter {
    fn enter_element(&mut self, name: &QualName) -> bool {
        !RAW_TEXT_ELEMENTS.contains(&name.local.as_ref())
    }

    fn visit_text(&mut self, text: &mut String) {
        match hyphenate_text_node(text) {
            Some(rewritten) => {
                *text = rewritten;
                self.rewritten += 1;
            }
            None => self.skipped += 1,
        }
    }
}

/// Parse an HTML fragment as the body of an otherwise empty document.
pub fn parse_fragment(html: &str) -> ArenaDom {
    let wrapped = format!("<!DOCTYPE html><html><head></head><body>{html}</body></html>");
    let sink = parse_document(ArenaSink::new(), ParseOpts::default())
        .from_utf8()
        .one(wrapped.as_bytes());
    if sink.error_count() > 0 {
        tracing::debug!(errors = sink.error_count(), "recovered from malformed markup");
    }
    sink.into_dom()
}

/// Markup path: hyphenate text nodes and serialize the fragment back.
fn hyphenate_markup(html: &str) -> String {
    let mut dom = parse_fragment(html);
    let Some(body) = dom.find_by_tag("body") else {
        tracing::warn!("parsed fragment has no body, returning input unchanged");
        return html.to_string();
    };

    let mut rewriter = TextRewriter::default();
    dom.walk(body, &mut rewriter);
    tracing::trace!(
        rewritten = rewriter.rewritten,
        skipped = rewriter.skipped,
        "walked text nodes"
    );

    match serialize_children(&dom, body) {
        Ok(out) => out,
        Err(e) => {
            tracing::warn!(error = %e, "serialization failed, returning input unchanged");
            html.to_string()
        }
    }
}
