use serde::Serialize;

use crate::benchmarks::CategoryDef;
use crate::input::InputError;
use crate::pipeline::classify::CellClassifier;
use crate::pipeline::extract::{CategoryResult, extract_category};
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Success,
    Partial,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFailure {
    pub category: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncSummary {
    pub model: String,
    pub status: SyncStatus,
    pub categories_processed: usize,
    pub categories_with_model: usize,
    pub records_emitted: usize,
    pub results: Vec<CategoryResult>,
    pub errors: Vec<CategoryFailure>,
}

/// Processes each category in catalogue order. A category whose table cannot
/// be loaded is recorded as a failure and the run moves on.
pub fn run_categories<F>(
    categories: &[CategoryDef],
    model_id: &str,
    classifier: &dyn CellClassifier,
    mut load: F,
) -> SyncSummary
where
    F: FnMut(&CategoryDef) -> Result<Table, InputError>,
{
    let mut results = Vec::with_capacity(categories.len());
    let mut errors = Vec::new();

    for category in categories {
        let _span = tracing::info_span!("category", code = %category.code).entered();
        match load(category) {
            Ok(table) => {
                results.push(extract_category(&table, category, model_id, classifier));
            }
            Err(err) => {
                tracing::error!("failed to load table: {err}");
                errors.push(CategoryFailure {
                    category: category.code.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    let categories_processed = results.len();
    let status = sync_status(categories_processed, errors.len());
    let records_emitted: usize = results.iter().map(|r| r.records.len()).sum();
    let categories_with_model = results.iter().filter(|r| r.is_found()).count();

    tracing::info!(
        model = model_id,
        status = ?status,
        categories_processed,
        records_emitted,
        failures = errors.len(),
        "sync completed"
    );

    SyncSummary {
        model: model_id.to_string(),
        status,
        categories_processed,
        categories_with_model,
        records_emitted,
        results,
        errors,
    }
}

pub fn sync_status(processed: usize, failed: usize) -> SyncStatus {
    if failed == 0 {
        SyncStatus::Success
    } else if processed > 0 {
        SyncStatus::Partial
    } else {
        SyncStatus::Error
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/sync.rs"]
mod tests;
