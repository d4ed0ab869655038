//! Diagnosis rules.
//!
//! A rule pairs a condition with a diagnosis and an explanation. Conditions
//! are predicate objects: anything implementing [`Predicate`] can be plugged
//! into a [`Rule`] without touching the engine. The shipped rules use the
//! data-driven [`Condition`] tree.

use crate::facts::{keys, FactKind, FactStore, FactValue, Smoke};
use std::fmt;
use thiserror::Error;

/// Why a single rule could not be evaluated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleFault {
    #[error("fact '{key}' is a {found}, expected a {expected}")]
    ShapeMismatch {
        key: String,
        expected: FactKind,
        found: FactKind,
    },

    #[error("{0}")]
    Failed(String),
}

/// A condition over the fact store
///
/// Implementations must be pure: they only read `facts` and return the same
/// answer for the same store. `Display` renders the condition for rule
/// listings.
pub trait Predicate: fmt::Display + Send + Sync {
    fn evaluate(&self, facts: &FactStore) -> Result<bool, RuleFault>;
}

// ============================================================================
// Condition tree
// ============================================================================

/// Declarative condition built from exact-equality tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `key == expected`; unknown keys are false, a value of the other shape
    /// is a fault
    Equals { key: String, expected: FactValue },
    /// Every child holds; stops at the first false
    All(Vec<Condition>),
}

impl Condition {
    pub fn is(key: &str, expected: impl Into<FactValue>) -> Self {
        Condition::Equals {
            key: key.to_string(),
            expected: expected.into(),
        }
    }

    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::All(conditions.into_iter().collect())
    }
}

impl Predicate for Condition {
    fn evaluate(&self, facts: &FactStore) -> Result<bool, RuleFault> {
        match self {
            Condition::Equals { key, expected } => match facts.get(key) {
                None => Ok(false),
                Some(found) if found.kind() != expected.kind() => {
                    Err(RuleFault::ShapeMismatch {
                        key: key.clone(),
                        expected: expected.kind(),
                        found: found.kind(),
                    })
                }
                Some(found) => Ok(found == expected),
            },
            Condition::All(children) => {
                for child in children {
                    if !child.evaluate(facts)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Equals { key, expected } => write!(f, "{} == {}", key, expected),
            Condition::All(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " AND ")?;
                    }
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// Rule
// ============================================================================

/// A named condition -> diagnosis entry
pub struct Rule {
    /// Unique, human-readable id
    pub name: String,
    pub condition: Box<dyn Predicate>,
    pub diagnosis: String,
    pub explanation: String,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        condition: impl Predicate + 'static,
        diagnosis: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            condition: Box::new(condition),
            diagnosis: diagnosis.into(),
            explanation: explanation.into(),
        }
    }

    pub fn evaluate(&self, facts: &FactStore) -> Result<bool, RuleFault> {
        self.condition.evaluate(facts)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("condition", &self.condition.to_string())
            .field("diagnosis", &self.diagnosis)
            .finish()
    }
}

/// The fixed, ordered rule table
pub fn build_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "No-start, dashboard off",
            Condition::all([
                Condition::is(keys::ARRANCA, false),
                Condition::is(keys::TABLERO, false),
            ]),
            "dead battery",
            "If the car does not start and the dashboard stays dark, the battery is usually discharged.",
        ),
        Rule::new(
            "No-start, dashboard on",
            Condition::all([
                Condition::is(keys::ARRANCA, false),
                Condition::is(keys::TABLERO, true),
            ]),
            "starter motor failure",
            "If the dashboard lights up but the engine does not crank, it is usually the starter motor or its circuit.",
        ),
        Rule::new(
            "Stalls on acceleration",
            Condition::all([
                Condition::is(keys::ARRANCA, true),
                Condition::is(keys::APAGA_AL_ACELERAR, true),
            ]),
            "fuel supply problem",
            "Stalling when accelerating points to a clogged filter, a weak fuel pump or injection trouble.",
        ),
        Rule::new(
            "Black smoke",
            Condition::is(keys::HUMO, Smoke::Negro),
            "rich fuel mixture",
            "Black smoke indicates excess fuel in the air/fuel mixture.",
        ),
        Rule::new(
            "Constant white smoke",
            Condition::is(keys::HUMO, Smoke::BlancoConstante),
            "head gasket failure",
            "Continuous white smoke can be coolant burning because of a damaged head gasket.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_unknown_is_false() {
        let cond = Condition::is(keys::TABLERO, false);
        assert_eq!(cond.evaluate(&FactStore::new()), Ok(false));
    }

    #[test]
    fn test_equals_shape_mismatch_faults() {
        let cond = Condition::is(keys::HUMO, Smoke::Negro);
        let facts = FactStore::new().with(keys::HUMO, true);
        assert_eq!(
            cond.evaluate(&facts),
            Err(RuleFault::ShapeMismatch {
                key: "humo".to_string(),
                expected: FactKind::Category,
                found: FactKind::Bool,
            })
        );
    }

    #[test]
    fn test_all_short_circuits() {
        // tablero has the wrong shape but is never reached
        let cond = Condition::all([
            Condition::is(keys::ARRANCA, false),
            Condition::is(keys::TABLERO, false),
        ]);
        let facts = FactStore::new()
            .with(keys::ARRANCA, true)
            .with(keys::TABLERO, "si");
        assert_eq!(cond.evaluate(&facts), Ok(false));
    }

    #[test]
    fn test_condition_display() {
        let rules = build_rules();
        assert_eq!(
            rules[0].condition.to_string(),
            "arranca == false AND tablero == false"
        );
        assert_eq!(rules[3].condition.to_string(), "humo == \"negro\"");
    }

    #[test]
    fn test_rule_names_unique() {
        let rules = build_rules();
        let mut names: Vec<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), rules.len());
    }
}
