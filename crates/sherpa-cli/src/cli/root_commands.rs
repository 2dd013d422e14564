use clap::{Args, Subcommand};
use sherpa_core::ExportFormat;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Export one artifact for a document.
    Export(ExportArgs),
    /// Export every format for a document.
    ExportAll(DocumentArgs),
    /// Print standards coverage for a document.
    Coverage(DocumentArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DocumentArgs {
    /// Document ID (reads `<source-dir>/<id>.json`)
    pub document_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Document ID (reads `<source-dir>/<id>.json`)
    pub document_id: String,

    /// Artifact format: rubric-markdown, rubric-pdf, csv, standards-summary
    #[arg(short, long)]
    pub format: ExportFormat,
}
