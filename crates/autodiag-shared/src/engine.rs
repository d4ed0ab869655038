//! Forward-chaining inference pass.
//!
//! Evaluates every rule against one fact store, in rule order, and collects
//! the ones that hold. A rule that faults is recorded and logged; it never
//! stops the remaining rules from being evaluated.

use crate::facts::FactStore;
use crate::rules::{build_rules, Rule, RuleFault};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Outcome of evaluating one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Matched,
    NotMatched,
    Faulted(RuleFault),
}

/// One rule together with its outcome
#[derive(Debug)]
pub struct Evaluation<'a> {
    pub rule: &'a Rule,
    pub outcome: RuleOutcome,
}

/// A rule whose condition held
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    pub rule: &'a Rule,
    pub diagnosis: &'a str,
}

/// A rule that could not be evaluated
#[derive(Debug, Clone)]
pub struct Fault<'a> {
    pub rule: &'a Rule,
    pub fault: RuleFault,
}

/// Result of one inference pass
#[derive(Debug, Default)]
pub struct Inference<'a> {
    /// Matches in rule order
    pub matches: Vec<Match<'a>>,
    pub faults: Vec<Fault<'a>>,
}

impl<'a> Inference<'a> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn diagnoses(&self) -> Vec<&'a str> {
        self.matches.iter().map(|m| m.diagnosis).collect()
    }

    /// Owned `(index, rule, diagnosis, explanation)` records, 1-based
    pub fn findings(&self) -> Vec<Finding> {
        self.matches
            .iter()
            .enumerate()
            .map(|(i, m)| Finding {
                index: i + 1,
                rule: m.rule.name.clone(),
                diagnosis: m.diagnosis.to_string(),
                explanation: m.rule.explanation.clone(),
            })
            .collect()
    }

    pub fn fault_records(&self) -> Vec<FaultRecord> {
        self.faults
            .iter()
            .map(|f| FaultRecord {
                rule: f.rule.name.clone(),
                reason: f.fault.to_string(),
            })
            .collect()
    }
}

/// Serializable view of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub index: usize,
    pub rule: String,
    pub diagnosis: String,
    pub explanation: String,
}

/// Serializable view of a fault
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaultRecord {
    pub rule: String,
    pub reason: String,
}

// ============================================================================
// Engine
// ============================================================================

/// Holds the rule set and runs inference passes over it
#[derive(Debug)]
pub struct InferenceEngine {
    rules: Vec<Rule>,
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new(build_rules())
    }
}

impl InferenceEngine {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate every rule, in order, without collecting
    pub fn evaluate(&self, facts: &FactStore) -> Vec<Evaluation<'_>> {
        self.rules
            .iter()
            .map(|rule| {
                let outcome = match rule.evaluate(facts) {
                    Ok(true) => RuleOutcome::Matched,
                    Ok(false) => RuleOutcome::NotMatched,
                    Err(fault) => RuleOutcome::Faulted(fault),
                };
                debug!(rule = %rule.name, ?outcome, "rule evaluated");
                Evaluation { rule, outcome }
            })
            .collect()
    }

    /// Run one inference pass
    pub fn infer(&self, facts: &FactStore) -> Inference<'_> {
        let mut inference = Inference::default();

        for evaluation in self.evaluate(facts) {
            let rule = evaluation.rule;
            match evaluation.outcome {
                RuleOutcome::Matched => inference.matches.push(Match {
                    rule,
                    diagnosis: &rule.diagnosis,
                }),
                RuleOutcome::NotMatched => {}
                RuleOutcome::Faulted(fault) => {
                    warn!(rule = %rule.name, error = %fault, "rule evaluation failed, skipping");
                    inference.faults.push(Fault { rule, fault });
                }
            }
        }

        info!(
            rules = self.rules.len(),
            matches = inference.matches.len(),
            faults = inference.faults.len(),
            "inference pass complete"
        );
        inference
    }
}
