//! YAML rendering for hOCR reports.

use crate::error::{Error, Result};
use crate::model::Document;

use super::{Report, ReportOptions};

/// Render the report of a document as YAML.
pub fn to_yaml(doc: &Document, options: &ReportOptions) -> Result<String> {
    let report = Report::from_document(doc, options);
    serde_yaml::to_string(&report)
        .map_err(|e| Error::Render(format!("YAML serialization error: {}", e)))
}
