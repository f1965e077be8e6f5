//! Content filter: decides when hyphenation runs and caches its output.
//!
//! The hyphenator itself knows nothing about locales, content channels or
//! caching. A host that renders posts passes each piece of content through
//! [`ContentFilter::apply`], which only hyphenates Finnish content on enabled
//! channels and reuses earlier results for identical input.
//!
//! # Example
//!
//! ```
//! use tavutin::filter::{Channel, ContentFilter, Settings};
//!
//! let filter = ContentFilter::new(Settings::default());
//! assert_eq!(filter.apply(Channel::Title, "fi", "talo"), "ta\u{AD}lo");
//! assert_eq!(filter.apply(Channel::Title, "en_US", "talo"), "talo");
//! ```

use std::borrow::Cow;
use std::time::Duration;

use crate::cache::{HyphenCache, content_key};
use crate::document::Hyphenator;

/// A piece of content a host may pass through the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Channel {
    /// Post or page body.
    Content,
    Title,
    /// Summary shown in listings.
    Excerpt,
}

/// Which channels are hyphenated. Every channel is on unless switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(default))]
pub struct Settings {
    pub hyphenate_content: bool,
    pub hyphenate_title: bool,
    pub hyphenate_excerpt: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hyphenate_content: true,
            hyphenate_title: true,
            hyphenate_excerpt: true,
        }
    }
}

impl Settings {
    pub fn enabled(&self, channel: Channel) -> bool {
        match channel {
            Channel::Content => self.hyphenate_content,
            Channel::Title => self.hyphenate_title,
            Channel::Excerpt => self.hyphenate_excerpt,
        }
    }

    /// Parse settings from JSON; missing keys keep their defaults.
    #[cfg(feature = "cli")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Check whether a locale identifier names Finnish.
///
/// Accepts a bare language (`fi`) or a language with region (`fi_FI`,
/// `fi-FI`), ignoring case.
pub fn is_finnish_locale(locale: &str) -> bool {
    let language = locale.split(['_', '-', '.', '@']).next().unwrap_or("");
    language.eq_ignore_ascii_case("fi")
}

/// Locale gate, channel switch and result cache around a [`Hyphenator`].
pub struct ContentFilter {
    settings: Settings,
    hyphenator: Hyphenator,
    cache: HyphenCache,
}

impl ContentFilter {
    /// Filter with the default hyphenator and a 12 hour cache.
    pub fn new(settings: Settings) -> Self {
        Self::with_hyphenator(settings, Hyphenator::default(), crate::cache::DEFAULT_TTL)
    }

    pub fn with_hyphenator(settings: Settings, hyphenator: Hyphenator, ttl: Duration) -> Self {
        Self {
            settings,
            hyphenator,
            cache: HyphenCache::new(ttl),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cache(&self) -> &HyphenCache {
        &self.cache
    }

    /// Hyphenate `content` if `locale` is Finnish and `channel` is enabled.
    pub fn apply<'a>(&self, channel: Channel, locale: &str, content: &'a str) -> Cow<'a, str> {
        if !is_finnish_locale(locale) || !self.settings.enabled(channel) {
            return Cow::Borrowed(content);
        }

        let key = content_key(content);
        if let Some(cached) = self.cache.get(&key) {
            tracing::trace!(?channel, %key, "cache hit");
            return Cow::Owned(cached);
        }

        let hyphenated = self.hyphenator.hyphenate(content);
        self.cache.insert(key, hyphenated.clone());
        Cow::Owned(hyphenated)
    }
}
