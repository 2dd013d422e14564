use sherpa_config::SherpaConfig;
use sherpa_export::{Exporter, FileSink, JsonDirSource, RenderOptions};

use crate::cli::{Commands, GlobalFlags};

pub mod coverage;
pub mod export;

/// Source, sink, and exporter built from the loaded configuration.
pub struct Pipeline {
    pub source: JsonDirSource,
    pub sink: FileSink,
    pub exporter: Exporter,
}

impl Pipeline {
    #[must_use]
    pub fn from_config(config: &SherpaConfig) -> Self {
        Self {
            source: JsonDirSource::new(&config.export.source_dir),
            sink: FileSink::new(&config.export.output_dir),
            exporter: Exporter::new(RenderOptions::from_config(config)),
        }
    }
}

pub async fn dispatch(
    command: Commands,
    config: &SherpaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let pipeline = Pipeline::from_config(config);
    match command {
        Commands::Export(args) => export::run(&args, &pipeline, flags).await,
        Commands::ExportAll(args) => export::run_all(&args.document_id, &pipeline, flags).await,
        Commands::Coverage(args) => coverage::run(&args.document_id, &pipeline, flags).await,
    }
}
