//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use autodiag_shared::config::OutputFormat;
use autodiag_shared::{FactPreset, Smoke};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// Vehicle fault diagnosis from symptoms
#[derive(Parser, Debug)]
#[command(name = "autodiagctl")]
#[command(about = "Autodiag - Vehicle fault diagnosis expert system", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input mode (default: flags if any symptom flag is given, else interactive)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Does the car start?
    #[arg(long, value_enum)]
    pub arranca: Option<YesNo>,

    /// Do the dashboard lights come on? (only matters if the car does not start)
    #[arg(long, value_enum)]
    pub tablero: Option<YesNo>,

    /// Does the engine stall when accelerating? (only matters if the car starts)
    #[arg(long = "apaga-al-acelerar", alias = "apaga_al_acelerar", value_enum)]
    pub apaga_al_acelerar: Option<YesNo>,

    /// Exhaust smoke: ninguno, negro, blanco or blanco_constante
    #[arg(long, value_parser = Smoke::from_str)]
    pub humo: Option<Smoke>,

    /// Config file (overrides $AUTODIAG_CONFIG and defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Print the rule table and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Facts supplied on the command line
    pub fn preset(&self) -> FactPreset {
        FactPreset {
            arranca: self.arranca.map(bool::from),
            tablero: self.tablero.map(bool::from),
            apaga_al_acelerar: self.apaga_al_acelerar.map(bool::from),
            humo: self.humo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Read symptoms from flags and config
    #[value(alias = "flags")]
    Cli,
    /// Ask questions on the terminal
    #[value(alias = "interactivo")]
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum YesNo {
    #[value(aliases = ["yes", "y", "s", "true"])]
    Si,
    #[value(aliases = ["n", "false"])]
    No,
}

impl From<YesNo> for bool {
    fn from(answer: YesNo) -> bool {
        matches!(answer, YesNo::Si)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> OutputFormat {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
