//! Autodiagctl library - exposes modules for testing

pub mod cli;
pub mod errors;
pub mod interview;
pub mod logging;
pub mod prompt;
pub mod run;
