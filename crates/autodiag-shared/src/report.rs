//! Report rendering for an inference pass.
//!
//! Text output is deterministic: the same matches always render to the same
//! string. Colour is left to the caller.

use crate::engine::{FaultRecord, Finding, Inference, Match};
use crate::error::DiagError;
use crate::facts::FactStore;
use crate::rules::Rule;
use serde::Serialize;
use std::fmt::Write;

pub const RESULT_HEADER: &str = "=== Result ===";
pub const NO_DIAGNOSIS: &str = "No diagnosis found with the current rules.";

/// Body of the text report (everything after the header)
pub fn format_matches(matches: &[Match<'_>]) -> String {
    if matches.is_empty() {
        return format!("{}\n", NO_DIAGNOSIS);
    }

    let mut out = String::new();
    for (i, m) in matches.iter().enumerate() {
        let _ = writeln!(out, "{}. Possible cause: {}", i + 1, m.diagnosis);
        let _ = writeln!(out, "   (Rule: {})", m.rule.name);
        let _ = writeln!(out, "   Why: {}", m.rule.explanation);
        out.push('\n');
    }
    out
}

/// Full text report
pub fn format_text(matches: &[Match<'_>]) -> String {
    format!("{}\n{}", RESULT_HEADER, format_matches(matches))
}

/// Machine-readable report
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    pub facts: FactStore,
    pub findings: Vec<Finding>,
    pub faults: Vec<FaultRecord>,
}

impl DiagnosisReport {
    pub fn new(facts: &FactStore, inference: &Inference<'_>) -> Self {
        Self {
            facts: facts.clone(),
            findings: inference.findings(),
            faults: inference.fault_records(),
        }
    }

    pub fn to_json(&self) -> Result<String, DiagError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Rule table for `--list-rules`
pub fn format_rule_table(rules: &[Rule]) -> String {
    let mut out = String::new();
    for (i, rule) in rules.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, rule.name);
        let _ = writeln!(out, "   if   {}", rule.condition);
        let _ = writeln!(out, "   then {}", rule.diagnosis);
    }
    out
}
