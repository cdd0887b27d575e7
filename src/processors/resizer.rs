// stickerize/src/processors/resizer.rs
use crate::core::ResizeAlgorithm;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

pub struct Resizer {
    algorithm: ResizeAlgorithm,
    max_side: u32,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm, max_side: u32) -> Self {
        Self { algorithm, max_side }
    }

    /// Scales `image` so that its longer side equals the configured maximum.
    /// Smaller images are scaled up.
    pub fn fit(&self, image: &DynamicImage) -> DynamicImage {
        let (orig_width, orig_height) = image.dimensions();
        let (width, height) = fit_dimensions(orig_width, orig_height, self.max_side);

        log::debug!(
            "Resizing image from {}x{} to {}x{} (scale {:.4})",
            orig_width,
            orig_height,
            width,
            height,
            scale_factor(orig_width, orig_height, self.max_side)
        );

        if width == orig_width && height == orig_height {
            return image.clone();
        }

        image.resize_exact(width, height, self.filter_type())
    }

    fn filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// `max_side / max(width, height)`.
pub fn scale_factor(width: u32, height: u32, max_side: u32) -> f64 {
    let longer = width.max(height).max(1);
    max_side as f64 / longer as f64
}

/// Dimensions after an aspect preserving scale that brings the longer side
/// to `max_side`. Both sides are truncated, then clamped to at least 1.
pub fn fit_dimensions(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let scale = scale_factor(width, height, max_side);
    let new_width = (width as f64 * scale) as u32;
    let new_height = (height as f64 * scale) as u32;

    (new_width.max(1), new_height.max(1))
}
