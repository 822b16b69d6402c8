//! # unhocr
//!
//! hOCR parsing and OCR training-data extraction for Rust.
//!
//! This library parses hOCR documents (the HTML-based output of Tesseract and
//! other OCR engines), decodes the properties embedded in their `title`
//! attributes, computes word confidence statistics, and exports every text
//! line as a cropped line image paired with its transcription.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unhocr::{parse_file, render};
//!
//! fn main() -> unhocr::Result<()> {
//!     // Parse a hOCR file
//!     let doc = parse_file("page.hocr")?;
//!
//!     // Mean word confidence
//!     let conf = unhocr::meta::document_average_confidence(&doc)?;
//!     println!("{:.2}", conf);
//!
//!     // Plain text, one line per hOCR line
//!     print!("{}", render::to_text(&doc));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Line export
//!
//! ```no_run
//! use unhocr::{ExportOptions, LineExporter};
//!
//! let exporter = LineExporter::new(ExportOptions::new().with_output_dir("lines"));
//! exporter.export_files(&["page.hocr"])?;
//! # Ok::<(), unhocr::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod meta;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{ExactCropper, ExportOptions, ExportStats, ImageSource, LineCropper, LineExporter};
pub use meta::{split_meta, BBox, Properties};
pub use model::{Document, Node, NodeKind, OcrInfo};
pub use parser::HocrParser;
pub use render::{JsonFormat, ReportOptions};

use std::io::Read;
use std::path::Path;

/// Parse a hOCR file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use unhocr::parse_file;
///
/// let doc = parse_file("page.hocr").unwrap();
/// println!("Lines: {}", doc.line_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = HocrParser::open(path)?;
    parser.parse()
}

/// Parse hOCR from bytes.
///
/// # Example
///
/// ```
/// let doc = unhocr::parse_bytes(b"<div class='ocr_page'></div>").unwrap();
/// assert_eq!(doc.page_count(), 1);
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = HocrParser::from_bytes(data)?;
    parser.parse()
}

/// Parse hOCR from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = HocrParser::from_reader(reader)?;
    parser.parse()
}

/// Extract plain text from a hOCR file.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Mean word confidence of a hOCR file.
pub fn average_confidence<P: AsRef<Path>>(path: P) -> Result<f64> {
    let doc = parse_file(path)?;
    meta::document_average_confidence(&doc)
}

/// Confidence of every word of a hOCR file, in document order.
pub fn word_confidences<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let doc = parse_file(path)?;
    meta::all_word_confidences(&doc)
}

/// Render the inspection report of a hOCR file as YAML.
pub fn to_yaml<P: AsRef<Path>>(path: P, options: &ReportOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_yaml(&doc, options)
}

/// Render the inspection report of a hOCR file as JSON.
pub fn to_json<P: AsRef<Path>>(path: P, options: &ReportOptions, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, options, format)
}
