mod cli;
mod core;
mod processors;
mod reporter;
mod storage;
mod utils;

pub use cli::{Algorithm, Cli, Commands};
pub use crate::core::processor::StickerProcessor;
pub use crate::core::{
    FilenameStrategy, MoveConfig, ProcessingStats, ResizeAlgorithm, Result, StickerError,
    COUNT_PATTERN, DEFAULT_PATTERN, OUTPUT_EXTENSION, PALETTE_QUALITY, STICKER_SIDE,
};
pub use processors::allocator::{allocate_count, count_candidates, next_count};
pub use processors::border::center_offset;
pub use processors::{
    compile_pattern, filter_by_pattern, fit_dimensions, squareify, BatchProcessor, ColorSampler,
    Compressor, FilenameMapping, Loader, PaletteSampler, Resizer,
};
pub use reporter::{init_logging, level_tag, LogReporter, Reporter};
pub use storage::{resolve_directory, FsStore, ImageStore};
pub use utils::{format_file_size, sticker_output_path};

pub mod prelude {
    pub use crate::{
        BatchProcessor, ColorSampler, FsStore, ImageStore, LogReporter, MoveConfig,
        PaletteSampler, Reporter,
    };
}

// Re-export commonly used types
pub use image::{DynamicImage, Rgb};
