//! Effective-value resolution for a single question.
//!
//! Each field has its own resolution function so the precedence rule is
//! visible in one place:
//!
//! ```text
//! teacher override  >  AI consensus  >  default
//! ```
//!
//! A present override dominates even when the AI result is also present. A
//! field the override leaves empty falls through to the AI value.

use crate::entities::{Confidence, EffectiveAssessment, QuestionResult, Standard};
use crate::enums::{AssessmentSource, RigorLevel};

/// Resolve one question into its effective assessment. Never fails.
#[must_use]
pub fn resolve(question: &QuestionResult) -> EffectiveAssessment {
    EffectiveAssessment {
        question_number: question.question_number,
        question_text: question.question_text.clone(),
        effective_standards: resolve_standards(question),
        effective_rigor: resolve_rigor(question),
        source: resolve_source(question),
        confidence: resolve_confidence(question),
        justification: resolve_justification(question),
    }
}

/// Override standards, else consensus standards, else none.
#[must_use]
pub fn resolve_standards(question: &QuestionResult) -> Vec<Standard> {
    question
        .teacher_override
        .as_ref()
        .and_then(|o| o.overridden_standards.clone())
        .or_else(|| {
            question
                .ai_result
                .as_ref()
                .and_then(|ai| ai.consensus_standards.clone())
        })
        .unwrap_or_default()
}

/// Override rigor, else consensus rigor, else [`RigorLevel::Mild`].
#[must_use]
pub fn resolve_rigor(question: &QuestionResult) -> RigorLevel {
    question
        .teacher_override
        .as_ref()
        .and_then(|o| o.overridden_rigor_level)
        .or_else(|| {
            question
                .ai_result
                .as_ref()
                .and_then(|ai| ai.consensus_rigor_level)
        })
        .unwrap_or(RigorLevel::Mild)
}

#[must_use]
pub const fn resolve_source(question: &QuestionResult) -> AssessmentSource {
    if question.teacher_override.is_some() {
        AssessmentSource::Teacher
    } else if question.ai_result.is_some() {
        AssessmentSource::Ai
    } else {
        AssessmentSource::Default
    }
}

/// Teacher confidence, else AI confidence score, else `N/A`.
#[must_use]
pub fn resolve_confidence(question: &QuestionResult) -> Confidence {
    question
        .teacher_override
        .as_ref()
        .and_then(|o| o.confidence_level)
        .or_else(|| question.ai_result.as_ref().and_then(|ai| ai.confidence_score))
        .into()
}

/// Teacher justification, else AI rigor justification, else empty.
#[must_use]
pub fn resolve_justification(question: &QuestionResult) -> String {
    question
        .teacher_override
        .as_ref()
        .and_then(|o| o.teacher_justification.clone())
        .or_else(|| {
            question
                .ai_result
                .as_ref()
                .and_then(|ai| ai.rigor_justification.clone())
        })
        .unwrap_or_default()
}
