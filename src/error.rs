//! Error types for unhocr library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unhocr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during hOCR processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not well-formed markup.
    #[error("Malformed markup: {0}")]
    MalformedMarkup(String),

    /// No `bbox` token in a title attribute.
    #[error("No bbox found in title")]
    MissingGeometry,

    /// A `bbox` token whose coordinates are not integers.
    #[error("Malformed bbox: {0}")]
    MalformedGeometry(String),

    /// A word without an `x_wconf` token.
    #[error("No x_wconf found in title")]
    MissingConfidence,

    /// An `x_wconf` token whose value is not a number.
    #[error("Malformed x_wconf: {0}")]
    MalformedConfidence(String),

    /// The document (or line) contains no words.
    #[error("No words found")]
    NoWordsFound,

    /// A bounding box that cannot be cut out of the page image.
    #[error("Invalid crop: {0}")]
    InvalidCrop(String),

    /// Embedded-image mode, but the line and page carry no `image` reference.
    #[error("No image reference for line {0}")]
    MissingImage(String),

    /// Error decoding or encoding an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Error during report rendering (YAML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// An error raised while processing a specific input file.
    #[error("{}: {source}", path.display())]
    InFile {
        /// The offending input file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the input file that caused this error.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Error::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(e) => Error::Io(io::Error::new(e.kind(), e.to_string())),
            _ => Error::MalformedMarkup(err.to_string()),
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::MalformedMarkup(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoWordsFound;
        assert_eq!(err.to_string(), "No words found");

        let err = Error::MalformedGeometry("99999999999".to_string());
        assert_eq!(err.to_string(), "Malformed bbox: 99999999999");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_in_file_names_path() {
        let err = Error::MissingGeometry.in_file("scans/a.hocr");
        assert_eq!(err.to_string(), "scans/a.hocr: No bbox found in title");
        assert!(matches!(err, Error::InFile { ref source, .. } if matches!(**source, Error::MissingGeometry)));
    }
}
