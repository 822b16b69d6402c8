//! JSON rendering for hOCR reports.

use crate::error::{Error, Result};
use crate::model::Document;

use super::{Report, ReportOptions};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Render the report of a document as JSON.
pub fn to_json(doc: &Document, options: &ReportOptions, format: JsonFormat) -> Result<String> {
    let report = Report::from_document(doc, options);
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&report),
        JsonFormat::Compact => serde_json::to_string(&report),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
