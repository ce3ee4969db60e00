use serde::Serialize;

use crate::benchmarks::mapping::unmapped_names;
use crate::benchmarks::{CategoryDef, resolve_benchmark_columns, resolve_model_column};
use crate::pipeline::aggregate::{
    GroupAverage, InvalidScore, ScoreRecord, average, build_records, group_averages,
};
use crate::pipeline::classify::CellClassifier;
use crate::pipeline::locate::{LocateError, count_matches, find_row};
use crate::table::{Cell, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractStatus {
    Found,
    ModelNotFound,
    NoModelColumn,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub category: String,
    pub model: String,
    pub status: ExtractStatus,
    pub model_column: Option<usize>,
    pub row_index: Option<usize>,
    /// Model cell of the matched row, as found in the table.
    pub matched_model: Option<String>,
    pub records: Vec<ScoreRecord>,
    pub unmapped: Vec<String>,
    pub invalid: Vec<InvalidScore>,
    pub average: Option<f64>,
    pub group_averages: Vec<GroupAverage>,
    pub skipped_malformed: Vec<usize>,
    /// Well-formed rows matching the model identifier; >1 means the first one was used.
    pub matching_rows: usize,
}

impl CategoryResult {
    pub fn is_found(&self) -> bool {
        self.status == ExtractStatus::Found
    }

    pub fn is_ambiguous(&self) -> bool {
        self.matching_rows > 1
    }
}

pub fn extract_category(
    table: &Table,
    category: &CategoryDef,
    model_id: &str,
    classifier: &dyn CellClassifier,
) -> CategoryResult {
    let model_column = resolve_model_column(&table.headers);
    let columns = resolve_benchmark_columns(&table.headers, &category.benchmarks);

    let mut result = CategoryResult {
        category: category.code.clone(),
        model: model_id.to_string(),
        status: ExtractStatus::Found,
        model_column,
        row_index: None,
        matched_model: None,
        records: Vec::new(),
        unmapped: Vec::new(),
        invalid: Vec::new(),
        average: None,
        group_averages: Vec::new(),
        skipped_malformed: Vec::new(),
        matching_rows: 0,
    };

    let located = match find_row(&table.rows, table.width(), model_column, model_id) {
        Ok(located) => located,
        Err(err) => {
            tracing::warn!(category = %category.code, model = model_id, "{err}");
            result.status = match err {
                LocateError::NoModelColumn => ExtractStatus::NoModelColumn,
                LocateError::RowNotFound(_) => ExtractStatus::ModelNotFound,
            };
            result.unmapped = unmapped_names(&category.benchmarks, &columns);
            result.skipped_malformed = malformed_rows(table);
            return result;
        }
    };

    if let Some(column) = model_column {
        result.matching_rows = count_matches(&table.rows, table.width(), column, model_id);
        if result.matching_rows > 1 {
            tracing::warn!(
                category = %category.code,
                model = model_id,
                matches = result.matching_rows,
                row = located.index,
                "model identifier matches several rows; using the first"
            );
        }
        result.matched_model = located
            .cells
            .get(column)
            .map(|cell| match cell {
                Cell::Text(s) => s.trim().to_string(),
                other => other.as_match_text(),
            });
    }

    let aggregation = build_records(&category.benchmarks, &columns, located.cells, classifier);

    result.row_index = Some(located.index);
    result.average = average(&aggregation.records);
    result.group_averages = group_averages(&aggregation.records);
    result.records = aggregation.records;
    result.unmapped = aggregation.unmapped;
    result.invalid = aggregation.invalid;
    result.skipped_malformed = located.skipped_malformed;

    tracing::info!(
        category = %category.code,
        model = model_id,
        records = result.records.len(),
        unmapped = result.unmapped.len(),
        invalid = result.invalid.len(),
        "extracted category scores"
    );
    result
}

fn malformed_rows(table: &Table) -> Vec<usize> {
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.len() != table.width())
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/extract.rs"]
mod tests;
