use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::benchmarks::{BenchmarkDefinition, CategoryDef};
use crate::pipeline::classify::RangeClassifier;
use crate::pipeline::sync::{SyncStatus, run_categories};
use crate::table::{Cell, Table};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn fairness() -> CategoryDef {
    CategoryDef {
        code: "diversity_non_discrimination_fairness".to_string(),
        endpoint: Some("/partial_9".to_string()),
        benchmarks: vec![
            BenchmarkDefinition {
                name: "Representation Bias: RedditBias".to_string(),
                key: "reddit_bias_score".to_string(),
                category: "bias".to_string(),
            },
            BenchmarkDefinition {
                name: "Prejudiced Answers: BBQ".to_string(),
                key: "bbq_prejudice_score".to_string(),
                category: "bias".to_string(),
            },
            BenchmarkDefinition {
                name: "Income Fairness: DecodingTrust".to_string(),
                key: "income_fairness_score".to_string(),
                category: "fairness".to_string(),
            },
        ],
    }
}

fn summary() -> SyncSummary {
    let table = Table::new(
        vec![
            "Model".to_string(),
            "Representation Bias: RedditBias".to_string(),
            "Prejudiced Answers: BBQ".to_string(),
        ],
        vec![vec![
            Cell::from("gpt-4-1106-preview"),
            Cell::from("N/A"),
            Cell::Number(0.98),
        ]],
    )
    .unwrap();
    run_categories(
        &[fairness()],
        "gpt-4-1106-preview",
        &RangeClassifier::default(),
        |_| Ok(table.clone()),
    )
}

#[test]
fn test_format_helpers() {
    assert_eq!(format_score(0.98), "0.980");
    assert_eq!(format_average(None), "no data");
    assert_eq!(format_average(Some(0.6)), "0.600");
}

#[test]
fn test_text_report_lists_scores_and_unmapped() {
    let text = render_report_text(&summary());
    assert!(text.contains("Model: gpt-4-1106-preview"));
    assert!(text.contains("Status: success"));
    assert!(text.contains("[0] Representation Bias: RedditBias = N/A"));
    assert!(text.contains("[1] Prejudiced Answers: BBQ = 0.980"));
    assert!(text.contains("Average: 0.980"));
    assert!(text.contains("Not mapped: Income Fairness: DecodingTrust"));
}

#[test]
fn test_text_report_model_not_found() {
    let mut s = summary();
    s.results[0].status = crate::pipeline::extract::ExtractStatus::ModelNotFound;
    let text = render_category_text(&s.results[0]);
    assert!(text.contains("Model not found: gpt-4-1106-preview"));
    assert!(!text.contains("Average"));
}

#[test]
fn test_summary_json_shape() {
    let s = summary();
    assert_eq!(s.status, SyncStatus::Success);
    let json = render_summary_json(&s).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["status"], "success");
    let result = &value["results"][0];
    assert_eq!(result["status"], "found");
    assert_eq!(result["records"][0]["score"], -1.0);
    assert_eq!(result["records"][1]["position"], 1);
    assert_eq!(result["average"], 0.98);
    assert_eq!(result["unmapped"][0], "Income Fairness: DecodingTrust");
}

#[test]
fn test_no_data_average_serializes_as_null() {
    let mut s = summary();
    s.results[0].average = None;
    let json = render_result_json(&s.results[0]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["average"].is_null());
}

#[test]
fn test_write_reports() {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("complai_scores_report_{}_{}", std::process::id(), id));

    write_reports(&summary(), &dir).unwrap();
    let json = fs::read_to_string(dir.join("summary.json")).unwrap();
    let text = fs::read_to_string(dir.join("report.txt")).unwrap();
    assert!(json.contains("\"bbq_prejudice_score\""));
    assert!(text.starts_with("Benchmark Score Extraction Report"));
}
