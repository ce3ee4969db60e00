use crate::pipeline::extract::{CategoryResult, ExtractStatus};
use crate::pipeline::sync::{SyncStatus, SyncSummary};
use crate::report::{format_average, format_record_score};

pub fn render_report_text(summary: &SyncSummary) -> String {
    let mut out = String::new();

    out.push_str("Benchmark Score Extraction Report\n");
    out.push_str("=================================\n\n");
    out.push_str(&format!("Model: {}\n", summary.model));
    out.push_str(&format!("Status: {}\n", status_label(summary.status)));
    out.push_str(&format!(
        "Categories processed: {} ({} with model)\n",
        summary.categories_processed, summary.categories_with_model
    ));
    out.push_str(&format!("Score records: {}\n\n", summary.records_emitted));

    for (i, result) in summary.results.iter().enumerate() {
        out.push_str(&format!("{}. ", i + 1));
        out.push_str(&render_category_text(result));
        out.push('\n');
    }

    if !summary.errors.is_empty() {
        out.push_str("Failures\n");
        for failure in &summary.errors {
            out.push_str(&format!("  {}: {}\n", failure.category, failure.message));
        }
    }

    out
}

pub fn render_category_text(result: &CategoryResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", result.category));

    match result.status {
        ExtractStatus::NoModelColumn => {
            out.push_str("   No model column in header row\n");
        }
        ExtractStatus::ModelNotFound => {
            out.push_str(&format!("   Model not found: {}\n", result.model));
        }
        ExtractStatus::Found => {
            if let (Some(row), Some(name)) = (result.row_index, &result.matched_model) {
                out.push_str(&format!("   Row {}: {}\n", row, name));
            }
            if result.is_ambiguous() {
                out.push_str(&format!(
                    "   Note: {} rows match '{}'; first one used\n",
                    result.matching_rows, result.model
                ));
            }
            for record in &result.records {
                out.push_str(&format!(
                    "   [{}] {} = {}\n",
                    record.position,
                    record.name,
                    format_record_score(record)
                ));
            }
            for invalid in &result.invalid {
                out.push_str(&format!(
                    "   Invalid value in column {} for {}: {:?}\n",
                    invalid.column, invalid.name, invalid.cell
                ));
            }
            out.push_str(&format!("   Average: {}\n", format_average(result.average)));
            let groups = result
                .group_averages
                .iter()
                .map(|g| format!("{}={}", g.category, format_average(g.average)))
                .collect::<Vec<_>>();
            if groups.len() > 1 {
                out.push_str(&format!("   By group: {}\n", groups.join(", ")));
            }
        }
    }

    if !result.unmapped.is_empty() {
        out.push_str(&format!("   Not mapped: {}\n", result.unmapped.join(", ")));
    }
    if !result.skipped_malformed.is_empty() {
        out.push_str(&format!(
            "   Malformed rows skipped: {}\n",
            result.skipped_malformed.len()
        ));
    }
    out
}

fn status_label(status: SyncStatus) -> &'static str {
    match status {
        SyncStatus::Success => "success",
        SyncStatus::Partial => "partial",
        SyncStatus::Error => "error",
    }
}
