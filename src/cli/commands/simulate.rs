//! Simulate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{
    apply_overrides, load_config, validate_config, OutputFormat, ScheduleSpec, SimulateArgs,
};
use crate::error::{Error, Result};
use crate::optim::{LRScheduler, Optimizer, ParamGroup, Parameter, StepCounter, SGD};
use serde::Serialize;
use tracing::info;

/// Learning rates in effect after one iteration of the training loop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    /// Scheduler step the iteration ended on
    pub step: i64,
    /// Rate of every parameter group, read back from the optimizer
    pub lrs: Vec<f32>,
}

/// Run the schedule against an SGD optimizer with zero-initialised parameters
///
/// Attaching a fresh scheduler takes step 0, so a fresh run records steps
/// `1..=steps` and a resumed one records `last_step + 1` onwards. Each
/// iteration takes an optimizer step, then advances the scheduler and applies
/// the new rates to the optimizer.
pub fn simulate(spec: &ScheduleSpec) -> Result<Vec<StepRecord>> {
    let groups = spec
        .optimizer
        .base_lrs
        .iter()
        .enumerate()
        .map(|(i, &lr)| ParamGroup::new(format!("group{i}"), lr, vec![Parameter::zeros(10)]))
        .collect();
    let mut optimizer = SGD::new(groups, spec.optimizer.momentum);
    let mut scheduler = spec.scheduler.resume(optimizer.lrs(), spec.run.last_step)?;
    if scheduler.last_step() == StepCounter::NOT_STARTED {
        scheduler.step();
    }
    scheduler.apply(&mut optimizer)?;

    let mut records = Vec::with_capacity(spec.run.steps);
    for _ in 0..spec.run.steps {
        optimizer.step();
        scheduler.step();
        scheduler.apply(&mut optimizer)?;
        records.push(StepRecord { step: scheduler.last_step(), lrs: optimizer.lrs() });
    }

    info!(
        scheduler = scheduler.name(),
        steps = records.len(),
        final_lr = scheduler.get_lr(),
        "simulation complete"
    );
    Ok(records)
}

/// Render records; text output shows one `step lr` line for `group`
pub fn format_records(records: &[StepRecord], format: OutputFormat, group: usize) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(records
            .iter()
            .filter_map(|r| r.lrs.get(group).map(|lr| format!("{} {lr}\n", r.step)))
            .collect()),
        OutputFormat::Json => serde_json::to_string_pretty(records)
            .map(|s| s + "\n")
            .map_err(|e| Error::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(records).map_err(|e| Error::Serialization(e.to_string()))
        }
    }
}

pub fn run_simulate(args: SimulateArgs, level: LogLevel) -> std::result::Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Loading schedule: {}", args.config.display()),
    );

    let mut spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, &args);
    validate_config(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    let groups = spec.optimizer.base_lrs.len();
    if args.group >= groups {
        return Err(format!(
            "Invalid group: {} (schedule has {groups} parameter group(s))",
            args.group
        ));
    }

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Simulating {} for {} step(s) from step {}",
            spec.scheduler.name(),
            spec.run.steps,
            spec.run.last_step
        ),
    );

    let records = simulate(&spec).map_err(|e| format!("Simulation failed: {e}"))?;
    let output =
        format_records(&records, args.format, args.group).map_err(|e| e.to_string())?;
    print!("{output}");

    Ok(())
}
