//! Golden tests for report rendering.

use autodiag_shared::engine::InferenceEngine;
use autodiag_shared::facts::{keys, FactStore, Smoke};
use autodiag_shared::report::{
    format_rule_table, format_text, DiagnosisReport, NO_DIAGNOSIS, RESULT_HEADER,
};

#[test]
fn test_no_diagnosis_text() {
    let engine = InferenceEngine::default();
    let facts = FactStore::new()
        .with(keys::ARRANCA, true)
        .with(keys::TABLERO, true)
        .with(keys::APAGA_AL_ACELERAR, false)
        .with(keys::HUMO, Smoke::Ninguno);
    let inference = engine.infer(&facts);
    let text = format_text(&inference.matches);
    assert_eq!(text, format!("{}\n{}\n", RESULT_HEADER, NO_DIAGNOSIS));
}

#[test]
fn test_matches_text() {
    let engine = InferenceEngine::default();
    let facts = FactStore::new()
        .with(keys::ARRANCA, false)
        .with(keys::TABLERO, false)
        .with(keys::HUMO, Smoke::Negro);
    let inference = engine.infer(&facts);
    let text = format_text(&inference.matches);

    let expected = "=== Result ===\n\
1. Possible cause: dead battery\n   (Rule: No-start, dashboard off)\n   Why: If the car does not start and the dashboard stays dark, the battery is usually discharged.\n\n\
2. Possible cause: rich fuel mixture\n   (Rule: Black smoke)\n   Why: Black smoke indicates excess fuel in the air/fuel mixture.\n\n";
    assert_eq!(text, expected);
}

#[test]
fn test_json_report() {
    let engine = InferenceEngine::default();
    let facts = FactStore::new()
        .with(keys::ARRANCA, true)
        .with(keys::TABLERO, true)
        .with(keys::APAGA_AL_ACELERAR, false)
        .with(keys::HUMO, Smoke::BlancoConstante);
    let inference = engine.infer(&facts);
    let json = DiagnosisReport::new(&facts, &inference).to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["facts"]["humo"], "blanco_constante");
    assert_eq!(value["findings"][0]["index"], 1);
    assert_eq!(value["findings"][0]["diagnosis"], "head gasket failure");
    assert_eq!(value["findings"][0]["rule"], "Constant white smoke");
    assert_eq!(value["faults"].as_array().unwrap().len(), 0);
}

#[test]
fn test_json_report_lists_faults() {
    let engine = InferenceEngine::default();
    let facts = FactStore::new().with(keys::HUMO, false);
    let inference = engine.infer(&facts);
    let report = DiagnosisReport::new(&facts, &inference);
    assert!(report.findings.is_empty());
    assert_eq!(report.faults.len(), 2);
    assert_eq!(report.faults[0].rule, "Black smoke");
    assert_eq!(report.faults[0].reason, "fact 'humo' is a bool, expected a category");
}

#[test]
fn test_rule_table() {
    let engine = InferenceEngine::default();
    let table = format_rule_table(engine.rules());
    assert!(table.starts_with("1. No-start, dashboard off\n   if   arranca == false AND tablero == false\n   then dead battery\n"));
    assert!(table.contains("5. Constant white smoke\n   if   humo == \"blanco_constante\"\n"));
}
