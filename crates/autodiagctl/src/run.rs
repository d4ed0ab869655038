//! One diagnosis run: pick the mode, gather facts, infer, print.

use crate::cli::{Cli, Mode};
use crate::interview::interview;
use crate::prompt::ConsolePrompter;
use anyhow::{Context, Result};
use autodiag_shared::config::{Config, OutputFormat};
use autodiag_shared::report::{self, DiagnosisReport, RESULT_HEADER};
use autodiag_shared::{FactPreset, FactStore, InferenceEngine};
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use tracing::debug;

pub const BANNER_CLI: &str = "=== Expert System: Vehicle Fault Diagnosis (CLI) ===";
pub const BANNER_INTERACTIVE: &str = "=== Expert System: Vehicle Fault Diagnosis (Interactive) ===";

/// Explicit mode wins; otherwise any symptom flag means flag mode
pub fn resolve_mode(explicit: Option<Mode>, flags: &FactPreset) -> Mode {
    match explicit {
        Some(mode) => mode,
        None if !flags.is_empty() => Mode::Cli,
        None => Mode::Interactive,
    }
}

/// Output settings after layering CLI over config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub color: bool,
}

impl OutputOptions {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            format: cli.format.map(OutputFormat::from).unwrap_or(config.output.format),
            color: config.output.color && !cli.no_color,
        }
    }
}

/// Run one diagnosis.
///
/// The report goes to `out`. Interview prompts go to `out` for text output
/// and to `prompts` for JSON output, so stdout stays parseable.
pub fn run<R: BufRead, W: Write, P: Write>(
    cli: &Cli,
    config: &Config,
    input: R,
    out: &mut W,
    prompts: &mut P,
) -> Result<()> {
    let engine = InferenceEngine::default();
    let options = OutputOptions::resolve(cli, config);

    if cli.list_rules {
        write!(out, "{}", report::format_rule_table(engine.rules()))?;
        return Ok(());
    }

    let flags = cli.preset();
    let mode = resolve_mode(cli.mode, &flags);
    debug!(?mode, ?options, "starting diagnosis");

    if options.format == OutputFormat::Text {
        let banner = match mode {
            Mode::Cli => BANNER_CLI,
            Mode::Interactive => BANNER_INTERACTIVE,
        };
        if options.color {
            writeln!(out, "{}\n", banner.bright_white().bold())?;
        } else {
            writeln!(out, "{}\n", banner)?;
        }
    }

    let facts = match options.format {
        OutputFormat::Text => gather_facts(mode, config, &flags, input, out, options.color)?,
        OutputFormat::Json => gather_facts(mode, config, &flags, input, prompts, options.color)?,
    };
    debug!(facts = facts.len(), "fact store ready");
    for (key, value) in facts.iter() {
        debug!(key, %value, "fact");
    }

    let inference = engine.infer(&facts);

    match options.format {
        OutputFormat::Json => {
            let json = DiagnosisReport::new(&facts, &inference).to_json()?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Text => {
            writeln!(out)?;
            if options.color {
                writeln!(out, "{}", RESULT_HEADER.bright_cyan().bold())?;
                write!(out, "{}", report::format_matches(&inference.matches))?;
            } else {
                write!(out, "{}", report::format_text(&inference.matches))?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn gather_facts<R: BufRead, W: Write>(
    mode: Mode,
    config: &Config,
    flags: &FactPreset,
    input: R,
    out: &mut W,
    color: bool,
) -> Result<FactStore> {
    match mode {
        Mode::Cli => Ok(config.facts.overlay(*flags).resolve()),
        Mode::Interactive => {
            let mut prompter = ConsolePrompter::new(input, &mut *out, color);
            let preset = interview(&mut prompter).context("interview aborted")?;
            Ok(preset.resolve())
        }
    }
}
