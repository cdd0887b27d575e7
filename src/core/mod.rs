// stickerize/src/core/mod.rs
pub mod processor;

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Longest side of a sticker, in pixels.
pub const STICKER_SIDE: u32 = 512;

/// Written stickers always use this extension, whatever the input format was.
pub const OUTPUT_EXTENSION: &str = "png";

/// Default source-side filter.
pub const DEFAULT_PATTERN: &str = ".+(jpe?g|png)";

/// Destination names the count strategy takes into account.
pub const COUNT_PATTERN: &str = r"^\d+\.(jpe?g|png)$";

/// Quality knob handed to the dominant colour extractor (1 is best, 10 is fast).
pub const PALETTE_QUALITY: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    #[default]
    Bicubic,
    Lanczos3,
}

/// Renaming strategies understood by the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilenameStrategy {
    /// Sequential integer names continuing after the highest numeric name
    /// already present in the destination.
    #[default]
    Count,
}

impl FilenameStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            FilenameStrategy::Count => "count",
        }
    }
}

impl FromStr for FilenameStrategy {
    type Err = StickerError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "count" => Ok(FilenameStrategy::Count),
            other => Err(StickerError::UnsupportedStrategy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MoveConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub pattern: String,
    /// Raw strategy name; parsed when a run starts so that an unknown name
    /// aborts before any directory is touched.
    pub filename_strategy: String,
    pub force: bool,
    pub dry_run: bool,
    pub remove_original: bool,
    pub add_borders: bool,
    pub algorithm: ResizeAlgorithm,
    pub max_side: u32,
    pub optimize_png: bool,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::new(),
            dest_dir: PathBuf::new(),
            pattern: DEFAULT_PATTERN.to_string(),
            filename_strategy: FilenameStrategy::Count.name().to_string(),
            force: false,
            dry_run: false,
            remove_original: false,
            add_borders: false,
            algorithm: ResizeAlgorithm::default(),
            max_side: STICKER_SIDE,
            optimize_png: false,
        }
    }
}

impl MoveConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_side == 0 {
            return Err(StickerError::InvalidParameter(
                "Maximum side must be at least 1 pixel".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub processed_count: usize,
    pub planned_count: usize,
    pub removed_count: usize,
    pub bytes_written: u64,
}

#[derive(Error, Debug)]
pub enum StickerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unexpected error while creating dest directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported strategy: '{0}'")]
    UnsupportedStrategy(String),

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

impl StickerError {
    /// Errors raised while resolving, filtering or allocating, i.e. before
    /// the first image is touched. The CLI reports these and exits cleanly.
    pub fn is_setup_failure(&self) -> bool {
        matches!(
            self,
            StickerError::NotFound(_)
                | StickerError::CreateDir { .. }
                | StickerError::UnsupportedStrategy(_)
                | StickerError::InvalidPattern { .. }
                | StickerError::InvalidFileName(_)
                | StickerError::InvalidParameter(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StickerError>;
