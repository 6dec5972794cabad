//! Output formatting utilities

use crate::application::RetagReport;

/// Format a list of tags for display, marker-prefixed, one per line.
pub fn format_tag_list(tags: &[String], marker: char) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}{}\n", marker, tag));
    }

    output
}

/// Format the outcome of a rename/remove run.
pub fn format_retag_report(report: &RetagReport) -> String {
    let mut output = String::new();
    for filename in &report.changes {
        output.push_str(&format!("  {}\n", filename));
    }

    if report.dry_run {
        output.push_str(&format!(
            "Dry run: {} of {} file(s) would be updated.\n",
            report.changed_files, report.scanned_files
        ));
    } else {
        output.push_str(&format!(
            "Updated {} of {} file(s).\n",
            report.changed_files, report.scanned_files
        ));
    }

    output
}
