pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::pipeline::aggregate::ScoreRecord;
use crate::pipeline::sync::SyncSummary;

pub use json::{render_result_json, render_summary_json};
pub use text::{render_category_text, render_report_text};

pub fn format_score(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn format_record_score(record: &ScoreRecord) -> String {
    if record.is_not_applicable() {
        "N/A".to_string()
    } else {
        format_score(record.score)
    }
}

pub fn format_average(avg: Option<f64>) -> String {
    match avg {
        Some(v) => format_score(v),
        None => "no data".to_string(),
    }
}

/// Writes `summary.json` and `report.txt` into `out_dir`.
pub fn write_reports(summary: &SyncSummary, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(summary))?;

    tracing::info!(
        summary = %summary_path.display(),
        report = %report_path.display(),
        "wrote reports"
    );
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
