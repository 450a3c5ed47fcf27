//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, ScheduleSpec, SchedulerSpec, ValidateArgs};

/// Format optimizer configuration as a string
pub fn format_optimizer_info(spec: &ScheduleSpec) -> String {
    let mut lines = vec![
        "  Optimizer: sgd".to_string(),
        format!("  Parameter groups: {}", spec.optimizer.base_lrs.len()),
        format!("  Base learning rates: {:?}", spec.optimizer.base_lrs),
    ];
    if spec.optimizer.momentum > 0.0 {
        lines.push(format!("  Momentum: {}", spec.optimizer.momentum));
    }
    lines.join("\n")
}

/// Format scheduler configuration as a string
pub fn format_scheduler_info(spec: &ScheduleSpec) -> String {
    let mut lines = vec![
        format!("  Scheduler: {}", spec.scheduler.name()),
        format!("  Target learning rate: {}", spec.scheduler.target_lr()),
        format!("  Warmup steps: {}", spec.scheduler.warmup_steps()),
    ];
    match &spec.scheduler {
        SchedulerSpec::WarmupMultiStep(config) => {
            lines.push(format!("  Milestones: {:?}", config.milestones));
            lines.push(format!("  Gamma: {}", config.gamma));
        }
        SchedulerSpec::WarmupPolynomial(config) => {
            lines.push(format!("  Total steps: {}", config.total_steps));
            lines.push(format!("  Power: {}", config.p));
        }
    }
    lines.join("\n")
}

/// Format run configuration as a string
pub fn format_run_info(spec: &ScheduleSpec) -> String {
    let mut lines = vec![format!("  Steps: {}", spec.run.steps)];
    if spec.run.last_step >= 0 {
        lines.push(format!("  Resume after step: {}", spec.run.last_step));
    }
    lines.join("\n")
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &ScheduleSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_optimizer_info(spec));
    println!();
    println!("{}", format_scheduler_info(spec));
    println!();
    println!("{}", format_run_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&spec);
    }

    Ok(())
}
