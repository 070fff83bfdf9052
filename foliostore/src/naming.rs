//! Upload filename derivation.
//!
//! Uploaded files keep a human-traceable name: the original stem sanitized
//! to `[a-zA-Z0-9_-]`, an epoch-millisecond stamp, and the original
//! extension. Uniqueness is millisecond-granular, which is enough for a
//! single-admin tool.
//!
use std::time::{SystemTime, UNIX_EPOCH};

/// Replace every character outside `[a-zA-Z0-9_-]` with `_`.
pub fn sanitize_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derive the stored filename for an upload from the client-supplied name
/// and an epoch-millisecond stamp.
///
/// Directory components are stripped first; the extension (after the last
/// dot) is kept verbatim. A name with no dot, or only a leading dot, gets
/// no extension.
pub fn upload_file_name(original: &str, stamp_millis: u128) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or(original);
    let (stem, ext) = match base.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (base, None),
    };
    let stem = sanitize_stem(stem);
    match ext {
        Some(ext) => format!("{stem}_{stamp_millis}.{ext}"),
        None => format!("{stem}_{stamp_millis}"),
    }
}

/// [`upload_file_name`] stamped with the current wall clock.
pub fn stamped_upload_name(original: &str) -> String {
    upload_file_name(original, now_millis())
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
