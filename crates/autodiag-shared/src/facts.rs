//! Fact store for a single diagnosis run.
//!
//! A fact is one named observation about the vehicle. Values are either a
//! boolean or a category string. A key that is absent is "unknown", which is
//! never equal to `false`, `true` or any category.
//!
//! The store is built by a collaborator (interview or presets) and then only
//! read: the engine borrows it immutably for the whole pass.

use crate::error::DiagError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Fact keys read by the shipped rules
pub mod keys {
    /// Does the car start (bool)
    pub const ARRANCA: &str = "arranca";
    /// Do the dashboard lights come on (bool)
    pub const TABLERO: &str = "tablero";
    /// Does the engine stall when accelerating (bool)
    pub const APAGA_AL_ACELERAR: &str = "apaga_al_acelerar";
    /// Exhaust smoke category (see [`super::Smoke`])
    pub const HUMO: &str = "humo";
}

// ============================================================================
// Values
// ============================================================================

/// Shape of a fact value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    Bool,
    Category,
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactKind::Bool => write!(f, "bool"),
            FactKind::Category => write!(f, "category"),
        }
    }
}

/// A single fact value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Bool(bool),
    Category(String),
}

impl FactValue {
    pub fn kind(&self) -> FactKind {
        match self {
            FactValue::Bool(_) => FactKind::Bool,
            FactValue::Category(_) => FactKind::Category,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FactValue::Bool(b) => Some(*b),
            FactValue::Category(_) => None,
        }
    }

    pub fn as_category(&self) -> Option<&str> {
        match self {
            FactValue::Category(c) => Some(c),
            FactValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactValue::Bool(b) => write!(f, "{}", b),
            FactValue::Category(c) => write!(f, "\"{}\"", c),
        }
    }
}

impl From<bool> for FactValue {
    fn from(b: bool) -> Self {
        FactValue::Bool(b)
    }
}

impl From<&str> for FactValue {
    fn from(s: &str) -> Self {
        FactValue::Category(s.to_string())
    }
}

impl From<String> for FactValue {
    fn from(s: String) -> Self {
        FactValue::Category(s)
    }
}

impl From<Smoke> for FactValue {
    fn from(smoke: Smoke) -> Self {
        FactValue::Category(smoke.as_str().to_string())
    }
}

// ============================================================================
// Smoke
// ============================================================================

/// Exhaust smoke categories
///
/// `Blanco` (intermittent white) is a valid observation that no rule
/// diagnoses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smoke {
    #[default]
    Ninguno,
    Negro,
    Blanco,
    BlancoConstante,
}

impl Smoke {
    /// Order in which the interview offers the colours
    pub const CHOICES: [Smoke; 4] = [
        Smoke::Negro,
        Smoke::Blanco,
        Smoke::BlancoConstante,
        Smoke::Ninguno,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Smoke::Ninguno => "ninguno",
            Smoke::Negro => "negro",
            Smoke::Blanco => "blanco",
            Smoke::BlancoConstante => "blanco_constante",
        }
    }

    /// Human label used by the interactive questions
    pub fn label(&self) -> &'static str {
        match self {
            Smoke::Negro => "Black",
            Smoke::Blanco => "White",
            Smoke::BlancoConstante => "White (constant)",
            Smoke::Ninguno => "None / not sure",
        }
    }
}

impl fmt::Display for Smoke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Smoke {
    type Err = DiagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ninguno" => Ok(Smoke::Ninguno),
            "negro" => Ok(Smoke::Negro),
            "blanco" => Ok(Smoke::Blanco),
            "blanco_constante" => Ok(Smoke::BlancoConstante),
            other => Err(DiagError::UnknownFactValue {
                key: keys::HUMO.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// Store
// ============================================================================

/// Mapping from fact key to value; absent keys are unknown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactStore {
    facts: BTreeMap<String, FactValue>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FactValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FactValue>) {
        self.facts.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FactValue> {
        self.facts.get(key)
    }

    /// Boolean value of `key`; `None` when unknown or not a boolean
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FactValue::as_bool)
    }

    /// Category value of `key`; `None` when unknown or not a category
    pub fn get_category(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FactValue::as_category)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FactValue)> {
        self.facts.iter().map(|(k, v)| (k.as_str(), v))
    }
}
