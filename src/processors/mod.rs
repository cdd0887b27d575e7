// stickerize/src/processors/mod.rs
pub mod allocator;
pub mod batch;
pub mod border;
mod compressor;
pub mod filter;
mod loader;
mod resizer;

pub use allocator::FilenameMapping;
pub use batch::BatchProcessor;
pub use border::{squareify, ColorSampler, PaletteSampler};
pub use compressor::Compressor;
pub use filter::{compile_pattern, filter_by_pattern};
pub use loader::Loader;
pub use resizer::{fit_dimensions, Resizer};
