//! Word confidence parsing and aggregation.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Document, Node};

static WCONF_RE: OnceLock<Regex> = OnceLock::new();

fn wconf_regex() -> &'static Regex {
    WCONF_RE.get_or_init(|| Regex::new(r"x_wconf ([0-9.]+)").unwrap())
}

/// Parse the `x_wconf` confidence of a word title.
///
/// # Example
///
/// ```
/// use unhocr::meta::parse_word_confidence;
///
/// let conf = parse_word_confidence("bbox 36 92 96 116; x_wconf 93").unwrap();
/// assert_eq!(conf, 93.0);
/// ```
pub fn parse_word_confidence(title: &str) -> Result<f64> {
    let caps = wconf_regex()
        .captures(title)
        .ok_or(Error::MissingConfidence)?;
    let raw = &caps[1];
    raw.parse()
        .map_err(|_| Error::MalformedConfidence(raw.to_string()))
}

/// Confidence of every word in the document, in document order.
///
/// Stops at the first word without a confidence; nothing is returned for the
/// words before it.
pub fn all_word_confidences(doc: &Document) -> Result<Vec<f64>> {
    doc.words().map(|word| parse_word_confidence(&word.title)).collect()
}

/// Mean word confidence of the document.
///
/// Returns `Error::NoWordsFound` for a document without words, so that an
/// empty document is never reported as an average of 0.
pub fn document_average_confidence(doc: &Document) -> Result<f64> {
    mean(&all_word_confidences(doc)?)
}

/// Mean word confidence of a single line.
pub fn line_average_confidence(line: &Node) -> Result<f64> {
    let confs = line
        .words()
        .map(|word| parse_word_confidence(&word.title))
        .collect::<Result<Vec<_>>>()?;
    mean(&confs)
}

fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::NoWordsFound);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}
