use thiserror::Error;

use crate::table::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("no model column in header row")]
    NoModelColumn,
    #[error("model not found: {0}")]
    RowNotFound(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocatedRow<'a> {
    pub index: usize,
    pub cells: &'a [Cell],
    /// Rows whose length differed from the header row, scanned before the match.
    pub skipped_malformed: Vec<usize>,
}

/// First well-formed row whose model cell contains `model_id`, case-insensitively.
///
/// Duplicate matches are not reported here; the first one in row order wins.
pub fn find_row<'a>(
    rows: &'a [Vec<Cell>],
    width: usize,
    model_column: Option<usize>,
    model_id: &str,
) -> Result<LocatedRow<'a>, LocateError> {
    let column = model_column.ok_or(LocateError::NoModelColumn)?;
    let needle = model_id.to_lowercase();
    let mut skipped_malformed = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        if row.len() != width {
            tracing::debug!(
                row = index,
                len = row.len(),
                expected = width,
                "skipping malformed row"
            );
            skipped_malformed.push(index);
            continue;
        }
        if cell_matches(row, column, &needle) {
            return Ok(LocatedRow {
                index,
                cells: row,
                skipped_malformed,
            });
        }
    }

    Err(LocateError::RowNotFound(model_id.to_string()))
}

/// Number of well-formed rows that `find_row` would consider a match.
pub fn count_matches(
    rows: &[Vec<Cell>],
    width: usize,
    model_column: usize,
    model_id: &str,
) -> usize {
    let needle = model_id.to_lowercase();
    rows.iter()
        .filter(|row| row.len() == width)
        .filter(|row| cell_matches(row, model_column, &needle))
        .count()
}

fn cell_matches(row: &[Cell], column: usize, needle: &str) -> bool {
    row.get(column)
        .is_some_and(|cell| cell.as_match_text().contains(needle))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/locate.rs"]
mod tests;
