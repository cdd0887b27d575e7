// stickerize/src/core/processor.rs
use super::{MoveConfig, Result};
use crate::processors::{squareify, ColorSampler, Resizer};
use image::DynamicImage;

/// Turns one decoded image into a sticker.
pub struct StickerProcessor {
    resizer: Resizer,
    max_side: u32,
    add_borders: bool,
}

impl StickerProcessor {
    pub fn new(config: &MoveConfig) -> Self {
        Self {
            resizer: Resizer::new(config.algorithm, config.max_side),
            max_side: config.max_side,
            add_borders: config.add_borders,
        }
    }

    /// Fits `image` into the sticker square and, with borders enabled, pads
    /// it to an exact square using the dominant colour of `image` itself.
    pub fn transform(&self, image: &DynamicImage, sampler: &dyn ColorSampler) -> Result<DynamicImage> {
        let fitted = self.resizer.fit(image);

        if !self.add_borders {
            return Ok(fitted);
        }

        let background = sampler.dominant_color(image)?;
        Ok(squareify(&fitted, background, self.max_side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};
    use std::cell::Cell;

    struct FixedSampler {
        color: Rgb<u8>,
        seen: Cell<Option<(u32, u32)>>,
    }

    impl ColorSampler for FixedSampler {
        fn dominant_color(&self, image: &DynamicImage) -> Result<Rgb<u8>> {
            self.seen.set(Some(image.dimensions()));
            Ok(self.color)
        }
    }

    fn sampler() -> FixedSampler {
        FixedSampler {
            color: Rgb([9, 9, 9]),
            seen: Cell::new(None),
        }
    }

    #[test]
    fn test_without_borders_only_fits() {
        let processor = StickerProcessor::new(&MoveConfig::default());
        let sampler = sampler();

        let sticker = processor
            .transform(&DynamicImage::new_rgb8(1024, 768), &sampler)
            .unwrap();

        assert_eq!(sticker.dimensions(), (512, 384));
        assert!(sampler.seen.get().is_none());
    }

    #[test]
    fn test_borders_sample_the_original() {
        let config = MoveConfig {
            add_borders: true,
            ..Default::default()
        };
        let processor = StickerProcessor::new(&config);
        let sampler = sampler();
        let original = DynamicImage::ImageRgb8(RgbImage::from_pixel(1024, 768, Rgb([200, 100, 50])));

        let sticker = processor.transform(&original, &sampler).unwrap().to_rgb8();

        assert_eq!(sampler.seen.get(), Some((1024, 768)));
        assert_eq!(sticker.dimensions(), (512, 512));
        assert_eq!(*sticker.get_pixel(10, 10), Rgb([9, 9, 9]));
        assert_eq!(*sticker.get_pixel(10, 500), Rgb([9, 9, 9]));
        assert_eq!(*sticker.get_pixel(256, 256), Rgb([200, 100, 50]));
    }
}
