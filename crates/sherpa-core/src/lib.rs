//! # sherpa-core
//!
//! Assessment result model and the pure resolution stages of the Standards
//! Sherpa export pipeline.
//!
//! Stages, leaves first:
//! - [`rubric`]: rigor level to credit-tier policy table
//! - [`resolve`]: teacher override / AI consensus / default merge for one question
//! - [`normalize`]: resolve a whole result set in numeric question order
//! - [`aggregate`]: group resolved questions by standard code
//!
//! Every stage is a total function over its input. Nothing here performs I/O.

pub mod aggregate;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod normalize;
pub mod resolve;
pub mod rubric;

pub use aggregate::{StandardsCoverage, StandardsCoverageEntry, aggregate, highest_rigor};
pub use entities::{
    AiResult, Confidence, DocumentDescriptor, DocumentResults, EffectiveAssessment,
    QuestionResult, Standard, TeacherOverride,
};
pub use enums::{AssessmentSource, ExportFormat, RigorLevel};
pub use errors::CoreError;
pub use normalize::normalize;
pub use resolve::resolve;
