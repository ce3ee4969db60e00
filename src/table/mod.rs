use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One cell of a dashboard results table.
///
/// The dashboard emits numbers, strings or `null` depending on the benchmark
/// and the model; anything else fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Absent,
}

impl Cell {
    /// Lowercase text used when matching model identifiers against a row.
    pub fn as_match_text(&self) -> String {
        match self {
            Cell::Number(v) => v.to_string(),
            Cell::Text(s) => s.to_lowercase(),
            Cell::Absent => String::new(),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table has no header row")]
    EmptyHeaders,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Rows whose length differs from `headers` are kept; row location skips them.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, TableError> {
        if headers.is_empty() {
            return Err(TableError::EmptyHeaders);
        }
        Ok(Self { headers, rows })
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/tests.rs"]
mod tests;
