//! Cutting line images out of page images.

use image::{DynamicImage, GenericImageView};

use crate::error::{Error, Result};
use crate::meta::BBox;

/// Produces the image of one line from its page image.
///
/// Implement this to post-process line images (binarisation, padding)
/// before they are written.
pub trait LineCropper {
    /// Cut `bbox` out of `page`.
    fn crop(&self, page: &DynamicImage, bbox: BBox) -> Result<DynamicImage>;
}

/// Pixel-exact cropper: the result is exactly the bounding box, unscaled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactCropper;

impl LineCropper for ExactCropper {
    fn crop(&self, page: &DynamicImage, bbox: BBox) -> Result<DynamicImage> {
        let (width, height) = page.dimensions();

        if bbox.x0 > bbox.x1 || bbox.y0 > bbox.y1 {
            return Err(Error::InvalidCrop(format!("{} is inverted", bbox)));
        }
        if bbox.is_empty() {
            return Err(Error::InvalidCrop(format!("{} has no area", bbox)));
        }
        if !bbox.fits_within(width, height) {
            return Err(Error::InvalidCrop(format!(
                "{} exceeds page image of {}x{}",
                bbox, width, height
            )));
        }

        Ok(page.crop_imm(bbox.x0, bbox.y0, bbox.width(), bbox.height()))
    }
}
