// crates/cli/src/presentation.rs
use mlscaffold_engine::report::{PathAction, RunReport};

use crate::options::ReportFormat;

pub fn print_report(report: &RunReport, format: ReportFormat) {
    match format {
        ReportFormat::Table => print_table(report),
        ReportFormat::Json => print_json(report),
    }
}

fn print_table(report: &RunReport) {
    println!("mlscaffold v{} · {}", crate::VERSION, report.operation.as_str());
    println!();

    println!("    ACTION            PATH");
    println!("----------------------------------------------");
    for outcome in &report.outcomes {
        println!("{:>14}    {}", outcome.action.to_string(), outcome.path.display());
    }
    for failure in &report.failures {
        println!("{:>14}    {}  ({})", "failed", failure.path.display(), failure.message);
    }

    println!("---");
    let touched = report.count(PathAction::FileCreated)
        + report.count(PathAction::FileTouched)
        + report.count(PathAction::FileRemoved);
    println!(
        "{:>14}    TOTAL ({} paths, {} failed)",
        touched,
        report.outcomes.len(),
        report.failures.len()
    );

    println!();
    if report.has_failures() {
        println!(
            "[mlscaffold] Completed with {} failure(s); see the log for details.",
            report.failures.len()
        );
    } else {
        println!("[mlscaffold] Completed: {} paths processed.", report.outcomes.len());
    }
}

fn print_json(report: &RunReport) {
    let mut value = serde_json::to_value(report).unwrap_or_default();
    if let Some(obj) = value.as_object_mut() {
        obj.insert("version".to_string(), crate::VERSION.into());
        obj.insert(
            "created".to_string(),
            report.count(PathAction::FileCreated).into(),
        );
        obj.insert(
            "removed".to_string(),
            report.count(PathAction::FileRemoved).into(),
        );
        obj.insert("failed".to_string(), report.failures.len().into());
    }
    if let Ok(json) = serde_json::to_string_pretty(&value) {
        println!("{json}");
    }
}
