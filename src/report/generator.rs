//! Text and JSON report generation.
//!
//! The text form is the canonical rendering: sprint name once, then each
//! engineer in configured order with their issue URLs, an explicit
//! no-matches marker, or an inline error.

use crate::models::SprintReport;
use anyhow::Result;

/// Generate the plain-text report.
pub fn generate_text_report(report: &SprintReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Active Sprint: {}\n\n", report.sprint.name));

    for engineer in &report.engineer_reports {
        output.push_str(&format!("{}:\n", engineer.display_name));

        if let Some(ref error) = engineer.error {
            output.push_str(&format!("  (error: {})\n", error));
        } else if engineer.issues.is_empty() {
            output.push_str("  (no matching issues)\n");
        } else {
            for issue in &engineer.issues {
                output.push_str(&format!("  {}\n", issue.url));
            }
        }

        output.push('\n');
    }

    output
}

/// Generate a JSON report.
pub fn generate_json_report(report: &SprintReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
