//! Result-set normalization: resolve every question, then order numerically.

use crate::entities::{EffectiveAssessment, QuestionResult};
use crate::resolve::resolve;

/// Resolve every question and sort by question number.
///
/// The sort compares numbers, not their string form, and is stable: questions
/// sharing a number keep their input order. Empty input yields empty output.
#[must_use]
pub fn normalize(questions: &[QuestionResult]) -> Vec<EffectiveAssessment> {
    let mut items: Vec<EffectiveAssessment> = questions.iter().map(resolve).collect();
    items.sort_by_key(|item| item.question_number);
    items
}
