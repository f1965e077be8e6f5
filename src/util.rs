//! Utility functions with platform-specific implementations.

use crate::error::{Error, Result};

/// Get current time as seconds since Unix epoch.
///
/// On native platforms, uses `SystemTime::now()`.
/// On WASM, uses `js_sys::Date::now()`.
#[cfg(not(target_arch = "wasm32"))]
pub fn time_now_secs() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
pub fn time_now_secs() -> u64 {
    // js_sys::Date::now() returns milliseconds as f64
    (js_sys::Date::now() / 1000.0) as u64
}

/// Decode bytes as strict UTF-8.
///
/// A UTF-8 byte order mark is skipped. A UTF-16 byte order mark, or any
/// malformed sequence, is an error: the input is never guessed at or decoded
/// lossily.
///
/// # Examples
///
/// ```
/// use tavutin::decode_utf8;
///
/// assert_eq!(decode_utf8("tavu".as_bytes()).unwrap(), "tavu");
/// assert!(decode_utf8(b"\xff\xfe").is_err());
/// ```
pub fn decode_utf8(bytes: &[u8]) -> Result<&str> {
    let body = match encoding_rs::Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) if encoding == encoding_rs::UTF_8 => &bytes[bom_len..],
        Some((encoding, _)) => return Err(Error::UnsupportedEncoding(encoding.name())),
        None => bytes,
    };

    std::str::from_utf8(body).map_err(|e| Error::Encoding {
        valid_up_to: e.valid_up_to() + (bytes.len() - body.len()),
    })
}
