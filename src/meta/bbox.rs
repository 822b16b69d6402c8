//! Bounding box geometry.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static BBOX_RE: OnceLock<Regex> = OnceLock::new();

fn bbox_regex() -> &'static Regex {
    BBOX_RE.get_or_init(|| Regex::new(r"bbox ([0-9]+) ([0-9]+) ([0-9]+) ([0-9]+)").unwrap())
}

/// A rectangle in page pixel coordinates, `(x0, y0)` top-left inclusive and
/// `(x1, y1)` bottom-right exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BBox {
    /// Create a bounding box from its corners.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width in pixels (0 for inverted boxes).
    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    /// Height in pixels (0 for inverted boxes).
    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    /// Check if the box covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Check if the box lies within an image of the given size.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x1 <= width && self.y1 <= height
    }

    /// Corners as an `(x0, y0, x1, y1)` tuple.
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x0, self.y0, self.x1, self.y1)
    }
}

impl std::fmt::Display for BBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bbox {} {} {} {}", self.x0, self.y0, self.x1, self.y1)
    }
}

/// Parse the first `bbox x0 y0 x1 y1` token of a title string.
///
/// Returns `Error::MissingGeometry` when there is no such token and
/// `Error::MalformedGeometry` when a coordinate does not fit a `u32`.
/// Corner ordering is not checked here.
pub fn parse_bbox(title: &str) -> Result<BBox> {
    let caps = bbox_regex()
        .captures(title)
        .ok_or(Error::MissingGeometry)?;

    let mut coords = [0u32; 4];
    for (i, coord) in coords.iter_mut().enumerate() {
        let raw = &caps[i + 1];
        *coord = raw
            .parse()
            .map_err(|_| Error::MalformedGeometry(format!("coordinate {} out of range", raw)))?;
    }

    Ok(BBox::new(coords[0], coords[1], coords[2], coords[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bbox() {
        let bbox = parse_bbox("ocr_line; bbox 10 20 300 400; baseline 0 -5").unwrap();
        assert_eq!(bbox.as_tuple(), (10, 20, 300, 400));
        assert_eq!(bbox.width(), 290);
        assert_eq!(bbox.height(), 380);
    }

    #[test]
    fn test_parse_bbox_missing() {
        assert!(matches!(
            parse_bbox("baseline 0 -5; x_size 31"),
            Err(Error::MissingGeometry)
        ));
        assert!(matches!(parse_bbox(""), Err(Error::MissingGeometry)));
        // Negative or partial coordinates never match the token.
        assert!(matches!(
            parse_bbox("bbox -1 0 10 10"),
            Err(Error::MissingGeometry)
        ));
        assert!(matches!(parse_bbox("bbox 1 2 3"), Err(Error::MissingGeometry)));
    }

    #[test]
    fn test_parse_bbox_overflow() {
        assert!(matches!(
            parse_bbox("bbox 0 0 99999999999 10"),
            Err(Error::MalformedGeometry(_))
        ));
    }

    #[test]
    fn test_parse_bbox_inverted_is_not_rejected() {
        let bbox = parse_bbox("bbox 50 50 10 10").unwrap();
        assert_eq!(bbox.as_tuple(), (50, 50, 10, 10));
        assert!(bbox.is_empty());
    }

    #[test]
    fn test_parse_bbox_first_token_wins() {
        let bbox = parse_bbox("bbox 1 2 3 4; bbox 5 6 7 8").unwrap();
        assert_eq!(bbox, BBox::new(1, 2, 3, 4));
    }

    #[test]
    fn test_fits_within() {
        let bbox = BBox::new(0, 0, 100, 50);
        assert!(bbox.fits_within(100, 50));
        assert!(!bbox.fits_within(99, 50));
        assert_eq!(bbox.to_string(), "bbox 0 0 100 50");
    }
}
