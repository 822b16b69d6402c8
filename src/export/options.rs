//! Line export options and configuration.

use std::path::PathBuf;

/// Options for exporting line images and transcriptions.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory receiving the `<name>_<line>.png` / `.txt` pairs
    pub output_dir: PathBuf,

    /// Where the page image of each line is read from
    pub image_source: ImageSource,

    /// Extension of sibling page images in `ImageSource::Sibling` mode
    pub image_extension: String,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the page image source.
    pub fn with_image_source(mut self, source: ImageSource) -> Self {
        self.image_source = source;
        self
    }

    /// Use the image path embedded in the hOCR.
    pub fn embedded_images(mut self) -> Self {
        self.image_source = ImageSource::Embedded;
        self
    }

    /// Set the extension of sibling page images (without the dot).
    pub fn with_image_extension(mut self, ext: impl Into<String>) -> Self {
        self.image_extension = ext.into();
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            image_source: ImageSource::Sibling,
            image_extension: "png".to_string(),
        }
    }
}

/// Where page images are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSource {
    /// The hOCR path with its extension replaced, e.g. `a.hocr` -> `a.png`
    #[default]
    Sibling,
    /// The `image "..."` property of the line, or else of its page
    Embedded,
}
