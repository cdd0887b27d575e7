// stickerize/src/reporter.rs
use colored::Colorize;
use log::{Level, LevelFilter};
use std::io::Write;

/// User facing messages of a run.
pub trait Reporter {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sends messages through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Tag printed in front of every log line.
pub fn level_tag(level: Level) -> String {
    match level {
        Level::Error => "[ERROR]".red().to_string(),
        Level::Warn => "[WARN]".yellow().to_string(),
        Level::Info => "[INFO]".yellow().to_string(),
        Level::Debug | Level::Trace => "[DEBUG]".dimmed().to_string(),
    }
}

/// Installs the stdout logger: `<coloured tag> <message>` per line.
pub fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{} {}", level_tag(record.level()), record.args()))
        .init();
}
