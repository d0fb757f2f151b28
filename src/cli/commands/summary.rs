//! Printing the batch summary

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::OutputFormat;
use crate::pipeline::BatchReport;

/// Human-readable lines for `report` at `level`; failures are always listed
pub fn report_lines(report: &BatchReport, level: LogLevel) -> Vec<String> {
    let mut lines = Vec::new();
    if level.allows(LogLevel::Verbose) {
        lines.extend(report.written.iter().map(|p| format!("  ✓ {}", p.display())));
    }
    if level.allows(LogLevel::Normal) {
        lines.extend(report.skipped.iter().map(|s| format!("  - {}: {}", s.item, s.reason)));
    }
    lines.extend(
        report
            .failed
            .iter()
            .map(|f| format!("  ✗ {} [{}]: {}", f.path.display(), f.code, f.message)),
    );
    if level.allows(LogLevel::Normal) {
        lines.push(report.to_string());
    }
    lines
}

pub fn print_report(
    report: &BatchReport,
    format: OutputFormat,
    level: LogLevel,
) -> Result<(), String> {
    match format {
        OutputFormat::Text => {
            for line in report_lines(report, level) {
                // Failure lines must survive --quiet.
                if line.starts_with("  ✗") {
                    eprintln!("{line}");
                } else {
                    log(level, LogLevel::Normal, &line);
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Turn a report with failures into a command error
pub fn check_report(report: &BatchReport) -> Result<(), String> {
    if report.is_success() {
        Ok(())
    } else {
        Err(format!(
            "{} of {} inputs failed",
            report.failed.len(),
            report.failed.len() + report.written.len()
        ))
    }
}
