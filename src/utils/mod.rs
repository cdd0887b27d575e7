// stickerize/src/utils/mod.rs
use crate::core::OUTPUT_EXTENSION;
use std::path::{Path, PathBuf};

/// Final location of a sticker: the allocated destination with its
/// extension swapped for the output format's.
pub fn sticker_output_path(dest_path: &Path) -> PathBuf {
    dest_path.with_extension(OUTPUT_EXTENSION)
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", size, UNITS[unit])
}
