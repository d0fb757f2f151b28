//! CLI command implementations

mod summary;


use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, validate_config, Cli, Command, VizConfig};
use crate::pipeline::{
    run_all, run_compare, run_heatmaps, run_log, run_metrics, run_pr_curves, BatchReport,
};
use crate::render::{ChartSink, PngRenderer};

pub use summary::{check_report, report_lines};

/// Load the configuration named by `--config` (or the defaults), then apply
/// command-line overrides and validate the result
pub fn resolve_config(cli: &Cli) -> Result<VizConfig, String> {
    let mut config = match &cli.config {
        Some(path) => load_config(path).map_err(|e| format!("Config error: {e}"))?,
        None => VizConfig::default(),
    };
    apply_overrides(&mut config, cli);
    validate_config(&config).map_err(|e| format!("Config error: {e}"))?;
    Ok(config)
}

/// Run the pipeline selected by `cli.command` against `sink`
pub fn execute(
    cli: &Cli,
    config: &VizConfig,
    sink: &mut dyn ChartSink,
) -> Result<BatchReport, String> {
    let result = match &cli.command {
        Command::Log(_) => run_log(config, sink),
        Command::Metrics => run_metrics(config, sink),
        Command::Heatmaps => run_heatmaps(config, sink),
        Command::PrCurves => run_pr_curves(config, sink),
        Command::Compare => run_compare(config, sink),
        Command::All => Ok(run_all(config, sink)),
    };
    result.map_err(|e| format!("[{}] {e}", e.code()))
}

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let level = LogLevel::from_flags(cli.quiet, cli.verbose);
    let config = resolve_config(&cli)?;

    log(level, LogLevel::Verbose, &format!("Input root: {}", config.input_root.display()));
    log(level, LogLevel::Verbose, &format!("Chart dpi: {}", config.chart.dpi));

    let mut sink = PngRenderer::new(config.chart);
    let report = execute(&cli, &config, &mut sink)?;
    summary::print_report(&report, cli.format, level)?;
    check_report(&report)
}
