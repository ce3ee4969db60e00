use std::collections::BTreeMap;

use crate::benchmarks::BenchmarkDefinition;

/// Benchmark name to column index. Names that did not resolve are absent.
pub type ColumnMap = BTreeMap<String, usize>;

const MODEL_HEADER_NEEDLE: &str = "model";

/// First header containing "model", case-insensitively. Position breaks ties.
pub fn resolve_model_column(headers: &[String]) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.to_lowercase().contains(MODEL_HEADER_NEEDLE))
}

/// Exact, case-sensitive header match per definition; first equal header wins.
///
/// Benchmark names are long descriptive strings that share words
/// ("Bias", "Fairness", ...), so no substring or case folding is applied here.
pub fn resolve_benchmark_columns(
    headers: &[String],
    definitions: &[BenchmarkDefinition],
) -> ColumnMap {
    let mut map = ColumnMap::new();
    for def in definitions {
        if let Some(idx) = headers.iter().position(|h| *h == def.name) {
            map.insert(def.name.clone(), idx);
        }
    }
    map
}

pub fn unmapped_names(definitions: &[BenchmarkDefinition], map: &ColumnMap) -> Vec<String> {
    definitions
        .iter()
        .filter(|d| !map.contains_key(&d.name))
        .map(|d| d.name.clone())
        .collect()
}
