//! Human-readable report output

use colored::Colorize;
use mvnext_core::PipelineReport;

/// Print what the run created, edited and skipped.
pub fn print_summary(report: &PipelineReport, pending: bool) {
    let (create, edit) = if pending {
        ("would create", "would edit")
    } else {
        ("created", "edited")
    };

    for file in &report.created {
        println!("   {} {} {}", "+".green(), create, file.path.as_str().cyan());
    }
    for file in &report.edited {
        println!("   {} {} {}", "~".yellow(), edit, file.path.as_str().cyan());
    }
    for file in &report.skipped {
        println!(
            "   {} skipped {}: {}",
            "!".red(),
            file.path.as_str().cyan(),
            file.reason
        );
    }
}

/// Print the report as pretty JSON.
pub fn print_json(report: &PipelineReport) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
