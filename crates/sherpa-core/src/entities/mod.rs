//! Input records and the derived per-question assessment.

mod assessment;
mod document;
mod question;
mod standard;

pub use assessment::{Confidence, EffectiveAssessment, NO_STANDARD_LABEL};
pub use document::{DocumentDescriptor, DocumentResults};
pub use question::{AiResult, QuestionResult, TeacherOverride};
pub use standard::Standard;

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
