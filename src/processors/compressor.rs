// stickerize/src/processors/compressor.rs
use crate::core::{Result, StickerError};
use image::{DynamicImage, ImageFormat};
use oxipng::{optimize_from_memory, Options};
use std::io::Cursor;
use std::path::Path;

/// Encodes stickers as PNG, optionally squeezing them through oxipng.
pub struct Compressor {
    optimize_png: bool,
}

impl Compressor {
    pub fn new() -> Self {
        Self {
            optimize_png: false,
        }
    }

    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    /// Writes `image` to `path` as PNG and returns the number of bytes written.
    pub fn save_png(&self, image: &DynamicImage, path: &Path) -> Result<u64> {
        log::debug!(
            "Saving {}x{} image to {} (optimize: {})",
            image.width(),
            image.height(),
            path.display(),
            self.optimize_png
        );

        let data = self.encode_png(image)?;
        std::fs::write(path, &data)?;

        log::debug!("Saved image: {} ({} bytes)", path.display(), data.len());
        Ok(data.len() as u64)
    }

    pub fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;

        if !self.optimize_png {
            return Ok(buffer.into_inner());
        }

        optimize_from_memory(&buffer.into_inner(), &Options::default())
            .map_err(|e| StickerError::ProcessingError(format!("PNG optimization failed: {}", e)))
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;
    use tempfile::TempDir;

    #[test]
    fn test_save_png_round_trips_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("1.png");
        let image = DynamicImage::new_rgb8(40, 30);

        let written = Compressor::new().save_png(&image, &path).unwrap();
        assert_eq!(written, std::fs::metadata(&path).unwrap().len());

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.dimensions(), (40, 30));
        assert_eq!(ImageFormat::from_path(&path).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_optimized_output_is_valid_png() {
        let image = DynamicImage::new_rgba8(64, 64);
        let data = Compressor::new()
            .with_png_optimization(true)
            .encode_png(&image)
            .unwrap();

        let decoded = image::load_from_memory_with_format(&data, ImageFormat::Png).unwrap();
        assert_eq!(decoded.dimensions(), (64, 64));
    }
}
