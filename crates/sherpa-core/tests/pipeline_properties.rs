//! Wire-format decoding and end-to-end properties of resolve → normalize → aggregate.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use sherpa_core::{
    AssessmentSource, DocumentResults, QuestionResult, RigorLevel, aggregate, normalize, resolve,
};

const PAYLOAD: &str = r#"{
  "document": { "id": "doc-42", "fileName": "Unit 7 Quiz.pdf" },
  "results": [
    {
      "questionNumber": 10,
      "questionText": "Write an equivalent expression for 3(x + 2).",
      "aiResult": {
        "consensusStandards": [{ "code": "7.EE.1", "description": "Apply properties of operations" }],
        "consensusRigorLevel": "mild",
        "confidenceScore": 0.91,
        "rigorJustification": "Single-step procedure"
      }
    },
    {
      "questionNumber": 2,
      "questionText": "Explain why the two expressions are equal.",
      "aiResult": {
        "consensusStandards": [{ "code": "7.EE.2", "description": "Rewrite expressions" }],
        "consensusRigorLevel": "spicy",
        "confidenceScore": null,
        "rigorJustification": null
      },
      "teacherOverride": {
        "overriddenStandards": [{ "code": "7.EE.1", "description": "Apply properties of operations" }],
        "overriddenRigorLevel": "medium",
        "teacherJustification": "Explanation is scaffolded",
        "confidenceLevel": 4
      }
    },
    {
      "questionNumber": 1,
      "questionText": null
    },
    {
      "questionNumber": 3,
      "questionText": "Estimate the total.",
      "aiResult": {
        "consensusStandards": [{ "description": "Code went missing upstream" }],
        "consensusRigorLevel": "medium"
      }
    }
  ]
}"#;

fn payload() -> DocumentResults {
    serde_json::from_str(PAYLOAD).expect("payload should decode")
}

#[test]
fn payload_validates_against_generated_schema() {
    let schema = serde_json::to_value(schema_for!(DocumentResults)).unwrap();
    let instance: serde_json::Value = serde_json::from_str(PAYLOAD).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    let errors: Vec<String> = validator.iter_errors(&instance).map(|e| format!("{e}")).collect();
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn nulls_decode_like_missing_values() {
    let results = payload().results;
    let blank = results.iter().find(|q| q.question_number == 1).unwrap();

    assert_eq!(blank.question_text, "");
    assert!(blank.ai_result.is_none());
    assert!(blank.teacher_override.is_none());

    let codeless = results.iter().find(|q| q.question_number == 3).unwrap();
    let standards = codeless.ai_result.as_ref().unwrap().consensus_standards.as_ref().unwrap();
    assert_eq!(standards[0].code, "");
}

#[test]
fn null_and_missing_top_level_fields_decode_alike() {
    let with_nulls = r#"{ "document": { "id": "doc-9", "fileName": null }, "results": null }"#;
    let with_missing = r#"{ "document": { "id": "doc-9" } }"#;

    let from_nulls = DocumentResults::from_json(with_nulls).expect("nulls should decode");
    let from_missing = DocumentResults::from_json(with_missing).expect("missing keys should decode");

    assert_eq!(from_nulls, from_missing);
    assert!(from_nulls.results.is_empty());
    assert_eq!(from_nulls.document.file_name, "");

    let schema = serde_json::to_value(schema_for!(DocumentResults)).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    let instance: serde_json::Value = serde_json::from_str(with_nulls).unwrap();
    assert!(validator.is_valid(&instance), "schema must accept explicit nulls");
}

#[test]
fn normalized_order_is_numeric() {
    let numbers: Vec<u32> = normalize(&payload().results)
        .iter()
        .map(|item| item.question_number)
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 10]);
}

#[test]
fn every_question_resolves_to_a_concrete_rigor() {
    for question in payload().results {
        let resolved = resolve(&question);
        assert!(RigorLevel::ALL.contains(&resolved.effective_rigor));
        if question.ai_result.is_none() && question.teacher_override.is_none() {
            assert_eq!(resolved.effective_rigor, RigorLevel::Mild);
            assert!(resolved.effective_standards.is_empty());
            assert_eq!(resolved.primary_standard_label(), "No Standard");
        }
    }
}

#[test]
fn override_dominates_regardless_of_ai_content() {
    for question in payload().results {
        let Some(correction) = question.teacher_override.clone() else {
            continue;
        };
        let resolved = resolve(&question);
        assert_eq!(resolved.source, AssessmentSource::Teacher);
        assert_eq!(Some(resolved.effective_standards), correction.overridden_standards);
        assert_eq!(Some(resolved.effective_rigor), correction.overridden_rigor_level);
    }
}

#[test]
fn coverage_tracks_teacher_modified_occurrences() {
    let items = normalize(&payload().results);
    let coverage = aggregate(&items);

    assert_eq!(coverage.len(), 1, "codeless standard must not be aggregated");
    let entry = coverage.get("7.EE.1").unwrap();
    assert_eq!(entry.question_numbers(), &[2, 10]);
    assert_eq!(entry.rigor_levels(), &[RigorLevel::Medium, RigorLevel::Mild]);
    assert_eq!(entry.teacher_modified_count(), 1);
    assert_eq!(entry.highest_rigor(), RigorLevel::Medium);
}

#[test]
fn scenario_two_questions_sharing_a_standard() {
    let results = vec![
        QuestionResult::new(1, "Q1").with_ai_result(sherpa_core::AiResult {
            consensus_standards: Some(vec![sherpa_core::Standard::new("7.EE.1", "")]),
            consensus_rigor_level: Some(RigorLevel::Mild),
            ..Default::default()
        }),
        QuestionResult::new(3, "Q3").with_teacher_override(sherpa_core::TeacherOverride {
            overridden_standards: Some(vec![sherpa_core::Standard::new("7.EE.1", "")]),
            overridden_rigor_level: Some(RigorLevel::Medium),
            ..Default::default()
        }),
    ];
    let coverage = aggregate(&normalize(&results));
    let entry = coverage.get("7.EE.1").unwrap();

    assert_eq!(entry.question_numbers(), &[1, 3]);
    assert_eq!(entry.rigor_levels(), &[RigorLevel::Mild, RigorLevel::Medium]);
    assert_eq!(entry.override_flags(), &[false, true]);
}
