//! Decoding of the hOCR title-attribute microsyntax.
//!
//! hOCR stores per-element properties in the `title` attribute as a list of
//! semicolon-separated segments, each a key followed by a space and a value:
//!
//! ```text
//! bbox 36 92 618 123; baseline 0.003 -7; x_wconf 93
//! ```
//!
//! [`split_meta`] turns such a string into key/value pairs. The specialised
//! parsers in [`bbox`] and [`confidence`] match their token anywhere in the
//! raw title instead.

mod bbox;
pub mod confidence;

pub use bbox::{parse_bbox, BBox};
pub use confidence::{
    all_word_confidences, document_average_confidence, line_average_confidence,
    parse_word_confidence,
};

use std::collections::BTreeMap;

/// Decoded title properties, keyed by token name.
pub type Properties = BTreeMap<String, String>;

/// Split a hOCR title string into key/value pairs.
///
/// Each `;`-separated segment is trimmed of spaces and split at its first
/// space: the left part is the key, the rest (trimmed) the value. A later
/// segment with the same key replaces an earlier one. A segment without a
/// space becomes a key with an empty value, so an empty title yields the
/// empty key. This never fails.
///
/// # Example
///
/// ```
/// use unhocr::meta::split_meta;
///
/// let props = split_meta("k1 v1; k2 v2a v2b");
/// assert_eq!(props["k1"], "v1");
/// assert_eq!(props["k2"], "v2a v2b");
/// ```
pub fn split_meta(title: &str) -> Properties {
    let mut props = Properties::new();
    for segment in title.split(';') {
        let segment = segment.trim_matches(' ');
        let (key, value) = match segment.split_once(' ') {
            Some((key, rest)) => (key, rest.trim_matches(' ')),
            None => (segment, ""),
        };
        props.insert(key.to_string(), value.to_string());
    }
    props
}

/// Strip one pair of surrounding quotes from a property value.
///
/// hOCR quotes file names, e.g. `image "scans/0001.png"`.
pub fn unquote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
