// stickerize/src/cli.rs
use crate::core::{MoveConfig, ResizeAlgorithm, DEFAULT_PATTERN};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Crop, rename and move images for Telegram stickers
#[derive(Parser, Debug)]
#[command(name = "stickerize", version, about)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resize, renumber and write every matching image as a PNG sticker
    #[command(name = "move_images", alias = "move-images")]
    MoveImages {
        /// Folder to take images from
        target_folder: PathBuf,

        /// Folder to write stickers to
        dest_folder: PathBuf,

        /// Regex pattern to filter files
        #[arg(long, default_value = DEFAULT_PATTERN)]
        pattern: String,

        /// Strategy of file renaming
        #[arg(long = "filename-strategy", default_value = "count")]
        filename_strategy: String,

        /// Create dest folder if not exists
        #[arg(
            long,
            default_value_t = false,
            action = ArgAction::Set,
            value_parser = BoolishValueParser::new(),
            value_name = "BOOL"
        )]
        force: bool,

        /// Print desired steps without executing them
        #[arg(long)]
        dry_run: bool,

        /// Delete the source image once its sticker is written
        #[arg(long)]
        remove_original: bool,

        /// Add borders to image to fit square
        #[arg(long)]
        add_borders: bool,

        /// Resampling filter
        #[arg(long, value_enum, default_value_t = Algorithm::Bicubic)]
        algorithm: Algorithm,

        /// Run written PNGs through oxipng
        #[arg(long)]
        optimize: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

impl Commands {
    pub fn into_config(self) -> MoveConfig {
        match self {
            Commands::MoveImages {
                target_folder,
                dest_folder,
                pattern,
                filename_strategy,
                force,
                dry_run,
                remove_original,
                add_borders,
                algorithm,
                optimize,
            } => MoveConfig {
                source_dir: target_folder,
                dest_dir: dest_folder,
                pattern,
                filename_strategy,
                force,
                dry_run,
                remove_original,
                add_borders,
                algorithm: algorithm.into(),
                optimize_png: optimize,
                ..Default::default()
            },
        }
    }
}
