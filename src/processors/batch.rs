// stickerize/src/processors/batch.rs
use crate::core::processor::StickerProcessor;
use crate::core::{FilenameStrategy, MoveConfig, ProcessingStats, Result};
use crate::processors::allocator::FilenameMapping;
use crate::processors::border::ColorSampler;
use crate::processors::filter::{compile_pattern, filter_by_pattern};
use crate::reporter::Reporter;
use crate::storage::{resolve_directory, ImageStore};
use crate::utils::{format_file_size, sticker_output_path};
use std::path::Path;

/// Runs a whole `move_images` invocation: resolve, filter, allocate, then
/// transform and write every image in allocation order.
pub struct BatchProcessor<'a> {
    config: MoveConfig,
    store: &'a dyn ImageStore,
    sampler: &'a dyn ColorSampler,
    reporter: &'a dyn Reporter,
    processor: StickerProcessor,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(
        config: MoveConfig,
        store: &'a dyn ImageStore,
        sampler: &'a dyn ColorSampler,
        reporter: &'a dyn Reporter,
    ) -> Self {
        let processor = StickerProcessor::new(&config);
        Self {
            config,
            store,
            sampler,
            reporter,
            processor,
        }
    }

    pub fn run(&self) -> Result<ProcessingStats> {
        let mapping = self.plan()?;
        self.process_mapping(&mapping)
    }

    /// Everything that has to succeed before the first image is touched.
    pub fn plan(&self) -> Result<FilenameMapping> {
        let strategy: FilenameStrategy = self.config.filename_strategy.parse()?;
        self.config.validate()?;
        let pattern = compile_pattern(&self.config.pattern)?;

        let source_names = resolve_directory(self.store, &self.config.source_dir, false)?;
        let dest_names = self.resolve_destination()?;

        let sources = filter_by_pattern(&source_names, &pattern);
        self.reporter
            .info(&format!("files to be processed: {:?}", sources));

        let destinations = strategy.eligible_destinations(&dest_names);
        let mapping = strategy.allocate(&sources, &destinations)?;

        if mapping.is_empty() {
            self.reporter.warn(&format!(
                "No files in {} match '{}'",
                self.config.source_dir.display(),
                self.config.pattern
            ));
        }

        Ok(mapping)
    }

    fn resolve_destination(&self) -> Result<Vec<String>> {
        let dest_dir = &self.config.dest_dir;

        if self.config.dry_run && self.config.force && !self.store.dir_exists(dest_dir) {
            self.reporter.info(&format!(
                "[Dry] dry run for creating dest directory {}",
                dest_dir.display()
            ));
            return Ok(Vec::new());
        }

        resolve_directory(self.store, dest_dir, self.config.force)
    }

    pub fn process_mapping(&self, mapping: &FilenameMapping) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats::default();

        for (source, dest) in mapping.iter() {
            let orig_path = self.config.source_dir.join(source);
            let dest_path = self.config.dest_dir.join(dest);
            self.process_image(&orig_path, &dest_path, &mut stats)?;
        }

        self.report_summary(&stats);
        Ok(stats)
    }

    fn process_image(&self, orig_path: &Path, dest_path: &Path, stats: &mut ProcessingStats) -> Result<()> {
        let image = self.store.read_image(orig_path)?;
        let sticker = self.processor.transform(&image, self.sampler)?;
        let final_path = sticker_output_path(dest_path);

        if self.config.dry_run {
            self.reporter.info(&format!(
                "[Dry] dry run for saving {} to {}",
                orig_path.display(),
                final_path.display()
            ));
            stats.planned_count += 1;
            return Ok(());
        }

        self.reporter.info(&format!(
            "saving {} to {}",
            orig_path.display(),
            final_path.display()
        ));
        stats.bytes_written += self.store.write_image(&sticker, &final_path)?;
        stats.processed_count += 1;

        if self.config.remove_original {
            self.store.remove_file(orig_path)?;
            stats.removed_count += 1;
        }

        Ok(())
    }

    fn report_summary(&self, stats: &ProcessingStats) {
        if self.config.dry_run {
            self.reporter
                .info(&format!("[Dry] {} images would be written", stats.planned_count));
            return;
        }

        self.reporter.info(&format!(
            "Wrote {} images ({}) to {}, removed {} originals",
            stats.processed_count,
            format_file_size(stats.bytes_written),
            self.config.dest_dir.display(),
            stats.removed_count
        ));
    }
}
