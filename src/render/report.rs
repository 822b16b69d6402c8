//! Inspection report of a parsed document.

use serde::{Deserialize, Serialize};

use crate::meta::{line_average_confidence, Properties};
use crate::model::{Document, Node};

use super::ReportOptions;

/// Pages and lines of a document with decoded properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Pages in document order
    pub pages: Vec<PageReport>,
}

/// One page of a [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageReport {
    /// Lines of the page in document order
    pub lines: Vec<LineReport>,
}

/// One line of a [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineReport {
    /// Raw `id` attribute of the line
    pub id: String,
    /// Line transcription
    pub text: String,
    /// Decoded title properties
    pub meta: Properties,
    /// Mean word confidence, when requested and available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Words of the line, when requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<WordReport>,
}

/// One word of a [`LineReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordReport {
    /// Word text without surrounding spaces and newlines
    pub text: String,
    /// Decoded title properties
    pub meta: Properties,
}

impl Report {
    /// Build the report of a document.
    pub fn from_document(doc: &Document, options: &ReportOptions) -> Self {
        let pages = doc
            .pages
            .iter()
            .map(|page| PageReport {
                lines: page
                    .lines()
                    .map(|line| LineReport::from_line(line, options))
                    .collect(),
            })
            .collect();
        Self { pages }
    }
}

impl LineReport {
    fn from_line(line: &Node, options: &ReportOptions) -> Self {
        let confidence = if options.include_confidence {
            line_average_confidence(line).ok()
        } else {
            None
        };

        let words = if options.include_words {
            line.words()
                .map(|word| WordReport {
                    text: word.clean_text().to_string(),
                    meta: word.meta(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            id: line.id.clone(),
            text: line.line_text(),
            meta: line.meta(),
            confidence,
            words,
        }
    }
}
