use crate::pipeline::extract::CategoryResult;
use crate::pipeline::sync::SyncSummary;

pub fn render_summary_json(summary: &SyncSummary) -> std::io::Result<String> {
    let mut out = serde_json::to_string_pretty(summary)?;
    out.push('\n');
    Ok(out)
}

pub fn render_result_json(result: &CategoryResult) -> std::io::Result<String> {
    let mut out = serde_json::to_string_pretty(result)?;
    out.push('\n');
    Ok(out)
}
