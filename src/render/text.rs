//! Plain text rendering for hOCR documents.

use crate::model::Document;

/// Convert a document to plain text, one line of text per hOCR line.
///
/// Unlike the reports, the text is not trimmed: each line ends with `\n`.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text()
}
