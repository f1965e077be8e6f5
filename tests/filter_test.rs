//! Content filter tests: locale gate, channel settings and caching.

use std::borrow::Cow;
use std::time::Duration;

use tavutin::filter::{Channel, ContentFilter, Settings, is_finnish_locale};
use tavutin::{Hyphenator, HyphenatorOptions, SoftHyphen, hyphenate_document};

#[test]
fn test_filter_matches_core_output() {
    let filter = ContentFilter::new(Settings::default());
    let html = "<p>Kirjoituskone ja puutarha</p>";
    assert_eq!(
        filter.apply(Channel::Content, "fi", html),
        hyphenate_document(html)
    );
}

#[test]
fn test_other_locales_pass_through() {
    let filter = ContentFilter::new(Settings::default());
    for locale in ["en_US", "sv_FI", "de", ""] {
        assert!(!is_finnish_locale(locale));
        assert!(matches!(
            filter.apply(Channel::Content, locale, "kirjoituskone"),
            Cow::Borrowed("kirjoituskone")
        ));
    }
}

#[test]
fn test_disabled_channels_pass_through() {
    let filter = ContentFilter::new(Settings {
        hyphenate_content: false,
        hyphenate_title: true,
        hyphenate_excerpt: false,
    });
    assert_eq!(filter.apply(Channel::Content, "fi", "talo"), "talo");
    assert_eq!(filter.apply(Channel::Excerpt, "fi", "talo"), "talo");
    assert_eq!(filter.apply(Channel::Title, "fi", "talo"), "ta\u{AD}lo");
}

#[test]
fn test_zero_ttl_never_serves_from_cache() {
    let filter = ContentFilter::with_hyphenator(
        Settings::default(),
        Hyphenator::new(HyphenatorOptions {
            soft_hyphen: SoftHyphen::Entity,
        }),
        Duration::ZERO,
    );
    assert_eq!(filter.apply(Channel::Title, "fi", "talo"), "ta&shy;lo");
    assert_eq!(filter.apply(Channel::Title, "fi", "talo"), "ta&shy;lo");
    assert_eq!(filter.cache().purge_expired(), 1);
}

#[test]
fn test_expired_entries_do_not_accumulate() {
    let filter = ContentFilter::with_hyphenator(
        Settings::default(),
        Hyphenator::default(),
        Duration::ZERO,
    );
    for i in 0..1000 {
        filter.apply(Channel::Content, "fi", &format!("kirjoituskone {i}"));
    }
    assert!(filter.cache().len() <= 1);
}

#[cfg(feature = "cli")]
#[test]
fn test_settings_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"hyphenate_title": false}}"#).expect("write settings");

    let json = std::fs::read_to_string(file.path()).expect("read settings");
    let settings = Settings::from_json(&json).expect("parse settings");
    assert!(settings.enabled(Channel::Content));
    assert!(!settings.enabled(Channel::Title));
    assert!(settings.enabled(Channel::Excerpt));
}

#[cfg(feature = "cli")]
#[test]
fn test_settings_file_rejects_wrong_types() {
    let err = Settings::from_json(r#"{"hyphenate_title": "ei"}"#).unwrap_err();
    assert!(matches!(err, tavutin::Error::Settings(_)));
}
