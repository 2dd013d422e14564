//! # sherpa-export
//!
//! Turns an analyzed document's result set into downloadable artifacts:
//!
//! - [`markdown`]: rubric as a Markdown table with rich tier markers
//! - [`tabular`]: the same rubric as a paginated landscape document
//! - [`csv`]: one row per question with every effective field
//! - [`summary`]: plain-text standards coverage, ordered by code
//!
//! [`Exporter`] runs the pipeline between a [`ResultSource`] and an
//! [`ArtifactSink`].

pub mod artifact;
pub mod csv;
pub mod error;
pub mod exporter;
pub mod markdown;
pub mod options;
pub mod pdf;
pub mod rows;
pub mod sink;
pub mod source;
pub mod summary;
pub mod table;
pub mod tabular;

pub use artifact::{Artifact, ExportReceipt, artifact_filename};
pub use error::ExportError;
pub use exporter::Exporter;
pub use options::RenderOptions;
pub use pdf::{PaginatedBackend, PdfBackend};
pub use sink::{ArtifactSink, Delivery, FileSink, MemorySink};
pub use source::{JsonDirSource, MemorySource, ResultSource};
