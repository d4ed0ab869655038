//! Shared types and the rule engine for autodiag components.
//!
//! Facts go in, rules are matched in order, matches come out. The CLI crate
//! only gathers facts and prints what this crate returns.

pub mod config;
pub mod engine;
pub mod error;
pub mod facts;
pub mod intake;
pub mod report;
pub mod rules;

pub use engine::{Inference, InferenceEngine, Match, RuleOutcome};
pub use error::DiagError;
pub use facts::{keys, FactStore, FactValue, Smoke};
pub use intake::FactPreset;
pub use rules::{build_rules, Condition, Predicate, Rule, RuleFault};
