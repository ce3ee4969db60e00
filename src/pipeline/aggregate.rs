use serde::Serialize;

use crate::benchmarks::{BenchmarkDefinition, ColumnMap};
use crate::pipeline::classify::{CellClassifier, Classification};
use crate::table::Cell;

/// Score stored for a benchmark the dashboard declares not applicable.
pub const NOT_APPLICABLE_SCORE: f64 = -1.0;

static ABSENT_CELL: Cell = Cell::Absent;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub name: String,
    pub key: String,
    pub category: String,
    pub score: f64,
    pub position: usize,
}

impl ScoreRecord {
    pub fn is_not_applicable(&self) -> bool {
        self.score == NOT_APPLICABLE_SCORE
    }
}

/// A mapped benchmark whose cell was neither a score nor "n/a".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidScore {
    pub name: String,
    pub key: String,
    pub column: usize,
    pub cell: Cell,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregation {
    pub records: Vec<ScoreRecord>,
    pub unmapped: Vec<String>,
    pub invalid: Vec<InvalidScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAverage {
    pub category: String,
    pub average: Option<f64>,
    pub scored: usize,
}

pub fn build_records(
    definitions: &[BenchmarkDefinition],
    columns: &ColumnMap,
    row: &[Cell],
    classifier: &dyn CellClassifier,
) -> Aggregation {
    let mut out = Aggregation::default();

    for def in definitions {
        let Some(&column) = columns.get(&def.name) else {
            out.unmapped.push(def.name.clone());
            continue;
        };
        let cell = row.get(column).unwrap_or(&ABSENT_CELL);

        let score = match classifier.classify(cell) {
            Classification::Valid(v) => v,
            Classification::NotAvailable => NOT_APPLICABLE_SCORE,
            Classification::Invalid => {
                tracing::warn!(
                    benchmark = %def.name,
                    column,
                    cell = ?cell,
                    "invalid score value; benchmark omitted"
                );
                out.invalid.push(InvalidScore {
                    name: def.name.clone(),
                    key: def.key.clone(),
                    column,
                    cell: cell.clone(),
                });
                continue;
            }
        };

        let position = out.records.len();
        out.records.push(ScoreRecord {
            name: def.name.clone(),
            key: def.key.clone(),
            category: def.category.clone(),
            score,
            position,
        });
    }

    out
}

/// Mean over records that are not marked not-applicable; `None` when nothing is left.
pub fn average(records: &[ScoreRecord]) -> Option<f64> {
    mean(records.iter().filter(|r| !r.is_not_applicable()).map(|r| r.score))
}

/// Same exclusion rule as [`average`], per `BenchmarkDefinition::category`,
/// in order of first appearance.
pub fn group_averages(records: &[ScoreRecord]) -> Vec<GroupAverage> {
    let mut groups: Vec<&str> = Vec::new();
    for record in records {
        if !groups.contains(&record.category.as_str()) {
            groups.push(&record.category);
        }
    }

    groups
        .into_iter()
        .map(|category| {
            let scores: Vec<f64> = records
                .iter()
                .filter(|r| r.category == category && !r.is_not_applicable())
                .map(|r| r.score)
                .collect();
            GroupAverage {
                category: category.to_string(),
                average: mean(scores.iter().copied()),
                scored: scores.len(),
            }
        })
        .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0f64, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { None } else { Some(sum / n as f64) }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/aggregate.rs"]
mod tests;
