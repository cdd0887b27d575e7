// stickerize/src/processors/border.rs
use crate::core::{Result, StickerError, PALETTE_QUALITY};
use color_thief::ColorFormat;
use image::{imageops, DynamicImage, GenericImageView, Rgb, RgbImage};

/// Number of palette entries requested from the quantizer; the first one is
/// the dominant colour.
const PALETTE_SIZE: u8 = 5;

/// Picks a background colour for the square border.
pub trait ColorSampler {
    fn dominant_color(&self, image: &DynamicImage) -> Result<Rgb<u8>>;
}

/// Median cut quantization through `color_thief`.
pub struct PaletteSampler {
    quality: u8,
}

impl PaletteSampler {
    pub fn new() -> Self {
        Self {
            quality: PALETTE_QUALITY,
        }
    }
}

impl Default for PaletteSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSampler for PaletteSampler {
    fn dominant_color(&self, image: &DynamicImage) -> Result<Rgb<u8>> {
        let pixels = image.to_rgba8();
        let palette = color_thief::get_palette(
            pixels.as_raw(),
            ColorFormat::Rgba,
            self.quality,
            PALETTE_SIZE,
        )
        .map_err(|e| {
            StickerError::ProcessingError(format!("Dominant color extraction failed: {:?}", e))
        })?;

        let dominant = palette.first().ok_or_else(|| {
            StickerError::ProcessingError("Dominant color extraction returned no colors".to_string())
        })?;

        log::debug!(
            "Dominant color: rgb({}, {}, {})",
            dominant.r,
            dominant.g,
            dominant.b
        );

        Ok(Rgb([dominant.r, dominant.g, dominant.b]))
    }
}

/// Offset that centres a `width`x`height` image on a `side`x`side` canvas.
pub fn center_offset(width: u32, height: u32, side: u32) -> (u32, u32) {
    (side.saturating_sub(width) / 2, side.saturating_sub(height) / 2)
}

/// Pastes `image` centred on a `side`x`side` canvas filled with `background`.
/// Pixels of `image` replace the canvas, no blending happens.
pub fn squareify(image: &DynamicImage, background: Rgb<u8>, side: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    let (x, y) = center_offset(width, height, side);

    let mut canvas = RgbImage::from_pixel(side, side, background);
    imageops::replace(&mut canvas, &image.to_rgb8(), x as i64, y as i64);

    DynamicImage::ImageRgb8(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::STICKER_SIDE;

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(512, 384, STICKER_SIDE), (0, 64));
        assert_eq!(center_offset(256, 512, STICKER_SIDE), (128, 0));
        assert_eq!(center_offset(511, 300, STICKER_SIDE), (0, 106));
    }

    #[test]
    fn test_squareify_landscape_strips() {
        let background = Rgb([10, 200, 30]);
        let content = Rgb([255, 0, 0]);
        let resized = DynamicImage::ImageRgb8(RgbImage::from_pixel(512, 384, content));

        let square = squareify(&resized, background, STICKER_SIDE).to_rgb8();
        assert_eq!(square.dimensions(), (512, 512));

        for x in [0, 255, 511] {
            for y in [0, 63] {
                assert_eq!(*square.get_pixel(x, y), background);
            }
            for y in [448, 511] {
                assert_eq!(*square.get_pixel(x, y), background);
            }
            for y in [64, 256, 447] {
                assert_eq!(*square.get_pixel(x, y), content);
            }
        }
    }

    #[test]
    fn test_squareify_portrait_side_borders() {
        let background = Rgb([0, 0, 255]);
        let resized = DynamicImage::ImageRgb8(RgbImage::from_pixel(256, 512, Rgb([1, 2, 3])));

        let square = squareify(&resized, background, STICKER_SIDE).to_rgb8();
        assert_eq!(*square.get_pixel(127, 100), background);
        assert_eq!(*square.get_pixel(128, 100), Rgb([1, 2, 3]));
        assert_eq!(*square.get_pixel(383, 100), Rgb([1, 2, 3]));
        assert_eq!(*square.get_pixel(384, 100), background);
    }

    #[test]
    fn test_palette_sampler_follows_image_colors() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |x, _| {
            Rgb([100 + x as u8, 50, 200])
        }));
        let color = PaletteSampler::new().dominant_color(&image).unwrap();

        assert!((96..=172).contains(&color[0]), "{:?}", color);
        assert!((color[1] as i16 - 50).abs() <= 8, "{:?}", color);
        assert!((color[2] as i16 - 200).abs() <= 8, "{:?}", color);
    }
}
