use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Standard, null_as_default};
use crate::enums::RigorLevel;

/// Consensus classification produced by the AI analysis stage.
///
/// Every field is optional on the wire; absent values fall through to the
/// defaults applied by [`crate::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiResult {
    #[serde(default)]
    pub consensus_standards: Option<Vec<Standard>>,
    #[serde(default)]
    pub consensus_rigor_level: Option<RigorLevel>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub rigor_justification: Option<String>,
}

/// A teacher's correction of the AI classification.
///
/// Presence alone marks the question as teacher-sourced, even when individual
/// fields are missing and fall back to the AI values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherOverride {
    #[serde(default)]
    pub overridden_standards: Option<Vec<Standard>>,
    #[serde(default)]
    pub overridden_rigor_level: Option<RigorLevel>,
    #[serde(default)]
    pub teacher_justification: Option<String>,
    #[serde(default)]
    pub confidence_level: Option<f64>,
}

/// One analyzed question as supplied by the result-retrieval collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<String>")]
    pub question_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_result: Option<AiResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_override: Option<TeacherOverride>,
}

impl QuestionResult {
    pub fn new(question_number: u32, question_text: impl Into<String>) -> Self {
        Self {
            question_number,
            question_text: question_text.into(),
            ai_result: None,
            teacher_override: None,
        }
    }

    #[must_use]
    pub fn with_ai_result(mut self, ai_result: AiResult) -> Self {
        self.ai_result = Some(ai_result);
        self
    }

    #[must_use]
    pub fn with_teacher_override(mut self, teacher_override: TeacherOverride) -> Self {
        self.teacher_override = Some(teacher_override);
        self
    }
}
