//! Tests for CLI argument parsing

use super::*;
use crate::config::{OptimSpec, RunParams, ScheduleSpec, SchedulerSpec};
use crate::optim::WarmupPolynomialConfig;
use std::path::PathBuf;

#[test]
fn test_parse_simulate_defaults() {
    let cli = parse_args(["calentar", "simulate", "schedule.yaml"]).unwrap();
    match cli.command {
        Command::Simulate(args) => {
            assert_eq!(args.config, PathBuf::from("schedule.yaml"));
            assert_eq!(args.steps, None);
            assert_eq!(args.last_step, None);
            assert_eq!(args.group, 0);
            assert_eq!(args.format, OutputFormat::Text);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(!cli.verbose);
    assert!(!cli.quiet);
}

#[test]
fn test_parse_simulate_overrides() {
    let cli = parse_args([
        "calentar",
        "simulate",
        "schedule.yaml",
        "--steps",
        "200",
        "--last-step",
        "-1",
        "--group",
        "1",
        "--format",
        "json",
        "-v",
    ])
    .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Command::Simulate(args) => {
            assert_eq!(args.steps, Some(200));
            assert_eq!(args.last_step, Some(-1));
            assert_eq!(args.group, 1);
            assert_eq!(args.format, OutputFormat::Json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_validate() {
    let cli = parse_args(["calentar", "-q", "validate", "schedule.yaml", "--detailed"]).unwrap();
    assert!(cli.quiet);
    assert_eq!(
        cli.command,
        Command::Validate(ValidateArgs { config: PathBuf::from("schedule.yaml"), detailed: true })
    );
}

#[test]
fn test_parse_invalid_format() {
    assert!(parse_args(["calentar", "simulate", "s.yaml", "--format", "xml"]).is_err());
}

#[test]
fn test_parse_missing_command() {
    assert!(parse_args(["calentar"]).is_err());
}

#[test]
fn test_output_format_from_str() {
    assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("yaml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
    assert!("csv".parse::<OutputFormat>().unwrap_err().contains("Valid formats"));
}

#[test]
fn test_apply_overrides() {
    let mut spec = ScheduleSpec {
        optimizer: OptimSpec { base_lrs: vec![0.1], momentum: 0.0 },
        scheduler: SchedulerSpec::WarmupPolynomial(WarmupPolynomialConfig::new(200, 6.4)),
        run: RunParams::default(),
    };
    let args = SimulateArgs {
        config: PathBuf::from("schedule.yaml"),
        steps: Some(200),
        last_step: Some(9),
        group: 0,
        format: OutputFormat::Text,
    };

    apply_overrides(&mut spec, &args);

    assert_eq!(spec.run.steps, 200);
    assert_eq!(spec.run.last_step, 9);
}

#[test]
fn test_apply_overrides_keeps_config_values() {
    let mut spec = ScheduleSpec {
        optimizer: OptimSpec { base_lrs: vec![0.1], momentum: 0.0 },
        scheduler: SchedulerSpec::WarmupPolynomial(WarmupPolynomialConfig::new(200, 6.4)),
        run: RunParams { steps: 50, last_step: 3 },
    };
    let args = SimulateArgs {
        config: PathBuf::from("schedule.yaml"),
        steps: None,
        last_step: None,
        group: 0,
        format: OutputFormat::Text,
    };

    apply_overrides(&mut spec, &args);

    assert_eq!(spec.run, RunParams { steps: 50, last_step: 3 });
}
