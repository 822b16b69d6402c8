//! Line export: paired line images and transcriptions for OCR training.
//!
//! For every line with a bounding box, the page image is cropped to the box
//! and written next to the line's text:
//!
//! ```text
//! <output_dir>/<name>_<line short id>.png
//! <output_dir>/<name>_<line short id>.txt
//! ```
//!
//! `<name>` is the file stem of the hOCR file. Lines without a `bbox` are
//! skipped. Any other failure stops the whole run.
//!
//! # Example
//!
//! ```no_run
//! use unhocr::export::{ExportOptions, LineExporter};
//!
//! let exporter = LineExporter::new(ExportOptions::new().with_output_dir("lines"));
//! let stats = exporter.export_files(&["scan_001.hocr", "scan_002.hocr"])?;
//! println!("{} lines written", stats.lines_exported);
//! # Ok::<(), unhocr::Error>(())
//! ```

mod crop;
mod options;

pub use crop::{ExactCropper, LineCropper};
pub use options::{ExportOptions, ImageSource};

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::meta::{self, BBox};
use crate::model::{Document, Node};
use crate::parser::HocrParser;

/// Counts collected during an export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStats {
    /// Documents processed
    pub documents: u32,

    /// Lines written as image/text pairs
    pub lines_exported: u32,

    /// Lines skipped for lack of a bounding box
    pub lines_skipped: u32,
}

impl ExportStats {
    /// Add the counts of another run.
    pub fn merge(&mut self, other: ExportStats) {
        self.documents += other.documents;
        self.lines_exported += other.lines_exported;
        self.lines_skipped += other.lines_skipped;
    }
}

/// Exports the lines of hOCR documents as training pairs.
pub struct LineExporter<C: LineCropper = ExactCropper> {
    options: ExportOptions,
    cropper: C,
}

impl LineExporter<ExactCropper> {
    /// Create an exporter with the pixel-exact cropper.
    pub fn new(options: ExportOptions) -> Self {
        Self::with_cropper(options, ExactCropper)
    }
}

impl<C: LineCropper> LineExporter<C> {
    /// Create an exporter with a custom cropper.
    pub fn with_cropper(options: ExportOptions, cropper: C) -> Self {
        Self { options, cropper }
    }

    /// Get the export options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Create the output directory if it does not exist yet.
    pub fn create_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.options.output_dir)?;
        Ok(())
    }

    /// Export every line of every file, in order.
    ///
    /// Stops at the first error, which is returned as `Error::InFile` naming
    /// the offending file. Files written before the error are left in place.
    pub fn export_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<ExportStats> {
        self.create_output_dir()?;

        let mut stats = ExportStats::default();
        for path in paths {
            let path = path.as_ref();
            let file_stats = self.export_path(path).map_err(|e| e.in_file(path))?;
            stats.merge(file_stats);
        }
        Ok(stats)
    }

    /// Export every line of one hOCR file.
    pub fn export_file<P: AsRef<Path>>(&self, path: P) -> Result<ExportStats> {
        self.create_output_dir()?;
        self.export_path(path.as_ref())
    }

    /// Export an already parsed document, cropping from a fixed page image.
    ///
    /// `name` prefixes every output file.
    pub fn export_document(&self, doc: &Document, name: &str, image: &Path) -> Result<ExportStats> {
        self.create_output_dir()?;
        self.export_lines(doc, name, |_, _| Ok(image.to_path_buf()))
    }

    fn export_path(&self, path: &Path) -> Result<ExportStats> {
        let doc = HocrParser::open(path)?.parse()?;
        let name = group_name(path);

        let stats = match self.options.image_source {
            ImageSource::Sibling => {
                let image = path.with_extension(&self.options.image_extension);
                self.export_lines(&doc, &name, |_, _| Ok(image.clone()))?
            }
            ImageSource::Embedded => {
                let base = path.parent().unwrap_or_else(|| Path::new(""));
                self.export_lines(&doc, &name, |page, line| embedded_image(base, page, line))?
            }
        };

        log::info!(
            "{}: exported {} lines, skipped {}",
            path.display(),
            stats.lines_exported,
            stats.lines_skipped
        );
        Ok(stats)
    }

    fn export_lines<F>(&self, doc: &Document, name: &str, resolve_image: F) -> Result<ExportStats>
    where
        F: Fn(&Node, &Node) -> Result<PathBuf>,
    {
        let mut stats = ExportStats {
            documents: 1,
            ..Default::default()
        };
        // Page images stay loaded until the document is done.
        let mut images: HashMap<PathBuf, DynamicImage> = HashMap::new();

        for page in &doc.pages {
            for line in page.lines() {
                let basename = line_basename(name, line);
                let image_path = resolve_image(page, line)?;

                let bbox = match line.bbox() {
                    Ok(bbox) => bbox,
                    Err(Error::MissingGeometry) => {
                        log::debug!("Skipping line {:?} without bbox", line.id);
                        stats.lines_skipped += 1;
                        continue;
                    }
                    Err(e) => return Err(e),
                };

                // Loaded on first use, so skipped lines never open the image.
                if !images.contains_key(&image_path) {
                    log::debug!("Loading page image {}", image_path.display());
                    let img = image::open(&image_path)?;
                    images.insert(image_path.clone(), img);
                }
                let page_image = &images[&image_path];

                self.write_line(page_image, line, bbox, &basename)?;
                stats.lines_exported += 1;
            }
        }

        Ok(stats)
    }

    fn write_line(&self, page: &DynamicImage, line: &Node, bbox: BBox, basename: &str) -> Result<()> {
        let line_image = self.cropper.crop(page, bbox)?;

        let image_path = self.options.output_dir.join(format!("{}.png", basename));
        line_image.save_with_format(&image_path, ImageFormat::Png)?;

        let text_path = self.options.output_dir.join(format!("{}.txt", basename));
        fs::write(&text_path, line.line_text())?;

        Ok(())
    }
}

/// Output name prefix for a hOCR file: its file stem.
pub fn group_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Output basename of a line: `<name>_<short id>`.
///
/// Lines without an id all map to `<name>_`, so each overwrites the last.
pub fn line_basename(name: &str, line: &Node) -> String {
    let short_id = line.short_id();
    if short_id.is_empty() {
        log::warn!(
            "Line without id in {}; its output overwrites earlier lines without id",
            name
        );
    }
    format!("{}_{}", name, short_id)
}

/// Page image named by the `image` property of the line or its page.
///
/// Relative paths are taken relative to the hOCR file's directory.
fn embedded_image(base: &Path, page: &Node, line: &Node) -> Result<PathBuf> {
    let reference = line
        .meta()
        .remove("image")
        .or_else(|| page.meta().remove("image"))
        .filter(|value| !meta::unquote(value).is_empty())
        .ok_or_else(|| Error::MissingImage(line.id.clone()))?;

    let path = PathBuf::from(meta::unquote(&reference));
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(base.join(path))
    }
}
