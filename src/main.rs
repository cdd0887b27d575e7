use anyhow::Context;
use clap::Parser;
use stickerize::{
    init_logging, BatchProcessor, Cli, FsStore, LogReporter, PaletteSampler, Reporter,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = cli.command.into_config();
    let store = FsStore::new(config.optimize_png);
    let sampler = PaletteSampler::new();
    let reporter = LogReporter;

    let dest_dir = config.dest_dir.clone();
    let batch = BatchProcessor::new(config, &store, &sampler, &reporter);

    match batch.run() {
        Ok(_) => Ok(()),
        Err(e) if e.is_setup_failure() => {
            reporter.error(&e.to_string());
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("moving images to {}", dest_dir.display())),
    }
}
