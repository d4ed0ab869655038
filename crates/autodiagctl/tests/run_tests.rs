//! End-to-end tests for a diagnosis run.
//!
//! Drives `run::run` with parsed arguments, scripted stdin and a captured
//! stdout:
//! - flag mode with defaults and config presets
//! - interactive mode with re-prompts
//! - JSON output
//! - mode auto-selection

use autodiag_shared::config::Config;
use autodiag_shared::report::format_text;
use autodiag_shared::{FactPreset, InferenceEngine};
use autodiagctl::cli::{Cli, Mode};
use autodiagctl::errors::{exit_code, EXIT_INPUT_CLOSED};
use autodiagctl::run::{resolve_mode, run, BANNER_CLI, BANNER_INTERACTIVE};
use clap::Parser;
use std::io::Cursor;

/// Returns (report output, prompt output) of one run
fn run_split(args: &[&str], config: &Config, stdin: &str) -> anyhow::Result<(String, String)> {
    let mut argv = vec!["autodiagctl", "--no-color"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    let mut prompts = Vec::new();
    run(
        &cli,
        config,
        Cursor::new(stdin.as_bytes().to_vec()),
        &mut out,
        &mut prompts,
    )?;
    Ok((
        String::from_utf8(out).unwrap(),
        String::from_utf8(prompts).unwrap(),
    ))
}

fn run_with(args: &[&str], config: &Config, stdin: &str) -> anyhow::Result<String> {
    run_split(args, config, stdin).map(|(out, _)| out)
}

#[test]
fn test_flag_mode_defaults_no_diagnosis() {
    let out = run_with(&["--mode", "cli"], &Config::default(), "").unwrap();
    assert!(out.starts_with(BANNER_CLI));
    assert!(out.contains("=== Result ===\nNo diagnosis found with the current rules.\n"));
}

#[test]
fn test_flag_mode_multi_match() {
    let out = run_with(&["--arranca", "no", "--humo", "negro"], &Config::default(), "").unwrap();
    assert!(out.contains("1. Possible cause: dead battery"));
    assert!(out.contains("2. Possible cause: rich fuel mixture"));
    assert!(!out.contains("starter motor failure"));
}

#[test]
fn test_flag_mode_plain_report_is_golden_text() {
    let out = run_with(&["--arranca", "no", "--tablero", "si"], &Config::default(), "").unwrap();

    let engine = InferenceEngine::default();
    let facts = FactPreset {
        arranca: Some(false),
        tablero: Some(true),
        ..Default::default()
    }
    .resolve();
    let expected = format_text(&engine.infer(&facts).matches);
    assert!(out.ends_with(&format!("\n{}", expected)), "{}", out);
}

#[test]
fn test_flag_mode_plain_white_smoke() {
    let out = run_with(&["--humo", "blanco"], &Config::default(), "").unwrap();
    assert!(out.contains("No diagnosis found"));
    assert!(!out.contains("head gasket failure"));
}

#[test]
fn test_config_presets_overridden_by_flags() {
    let config = Config::from_toml_str(
        "[facts]\narranca = false\ntablero = true\nhumo = \"blanco_constante\"\n",
    )
    .unwrap();

    let out = run_with(&["--mode", "cli"], &config, "").unwrap();
    assert!(out.contains("1. Possible cause: starter motor failure"));
    assert!(out.contains("2. Possible cause: head gasket failure"));

    let out = run_with(&["--tablero", "no"], &config, "").unwrap();
    assert!(out.contains("1. Possible cause: dead battery"));
}

#[test]
fn test_interactive_flow() {
    // starts: no, dashboard: si, smoke: yes, colour 3 = white (constant)
    let out = run_with(&[], &Config::default(), "no\nsi\ns\n3\n").unwrap();
    assert!(out.starts_with(BANNER_INTERACTIVE));
    assert!(out.contains("Do the dashboard lights come on? [s/n]:"));
    assert!(!out.contains("Does the car stall when accelerating?"));
    assert!(out.contains("1. Possible cause: starter motor failure"));
    assert!(out.contains("2. Possible cause: head gasket failure"));
}

#[test]
fn test_interactive_stall() {
    let out = run_with(&["--mode", "interactive"], &Config::default(), "si\nsi\nn\n").unwrap();
    assert!(out.contains("1. Possible cause: fuel supply problem"));
    assert!(out.contains("(Rule: Stalls on acceleration)"));
}

#[test]
fn test_interactive_input_closed() {
    let err = run_with(&[], &Config::default(), "no\n").unwrap_err();
    assert_eq!(exit_code(&err), EXIT_INPUT_CLOSED);
}

#[test]
fn test_json_output() {
    let out = run_with(
        &["--format", "json", "--arranca", "si", "--apaga-al-acelerar", "si"],
        &Config::default(),
        "",
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["facts"]["arranca"], true);
    assert_eq!(value["facts"]["tablero"], true);
    assert_eq!(value["findings"][0]["diagnosis"], "fuel supply problem");
}

#[test]
fn test_interactive_json_keeps_stdout_parseable() {
    let (out, prompts) = run_split(&["--format", "json"], &Config::default(), "no\nno\nn\n").unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["facts"]["arranca"], false);
    assert_eq!(value["facts"]["tablero"], false);
    assert_eq!(value["findings"][0]["diagnosis"], "dead battery");

    assert!(prompts.contains("Does the car start? [s/n]:"));
    assert!(!out.contains("[s/n]"));
}

#[test]
fn test_interactive_text_prompts_on_stdout() {
    let (out, prompts) = run_split(&[], &Config::default(), "si\nno\nn\n").unwrap();
    assert!(out.contains("Does the car start? [s/n]:"));
    assert!(prompts.is_empty());
}

#[test]
fn test_list_rules() {
    let out = run_with(&["--list-rules"], &Config::default(), "").unwrap();
    assert!(out.starts_with("1. No-start, dashboard off\n"));
    assert_eq!(out.matches("   then ").count(), 5);
}

#[test]
fn test_resolve_mode() {
    let cli = Cli::try_parse_from(["autodiagctl"]).unwrap();
    assert_eq!(resolve_mode(None, &cli.preset()), Mode::Interactive);

    let cli = Cli::try_parse_from(["autodiagctl", "--humo", "ninguno"]).unwrap();
    assert_eq!(resolve_mode(None, &cli.preset()), Mode::Cli);
    assert_eq!(
        resolve_mode(Some(Mode::Interactive), &cli.preset()),
        Mode::Interactive
    );
}
