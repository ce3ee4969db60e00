use std::fs;
use std::path::{Path, PathBuf};

pub mod compressed;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::table::{Cell, Table, TableError};
use compressed::{open_maybe_gz, split_saved_response_name, strip_response_suffixes};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("invalid table: {0}")]
    Table(#[from] TableError),
}

#[derive(Debug, Deserialize)]
struct RawTable {
    headers: Vec<String>,
    data: Vec<Vec<Cell>>,
}

/// Reads a persisted dashboard response (`.json` or `.json.gz`) into a [`Table`].
pub fn load_table(path: &Path) -> Result<Table, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let reader = open_maybe_gz(path)?;
    let value: Value = serde_json::from_reader(reader)?;
    let table = decode_response(value)?;
    tracing::debug!(
        path = %path.display(),
        headers = table.headers.len(),
        rows = table.rows.len(),
        "decoded response table"
    );
    Ok(table)
}

/// Accepts the bare `{headers, data}` object or the RPC envelope, a list whose
/// first element is that object.
pub fn decode_response(value: Value) -> Result<Table, InputError> {
    let table_value = match value {
        Value::Array(mut items) => {
            if items.is_empty() {
                return Err(InputError::InvalidResponse(
                    "response list is empty".to_string(),
                ));
            }
            items.swap_remove(0)
        }
        obj @ Value::Object(_) => obj,
        other => {
            return Err(InputError::InvalidResponse(format!(
                "expected object or list, found {}",
                json_kind(&other)
            )));
        }
    };

    let Value::Object(map) = &table_value else {
        return Err(InputError::InvalidResponse(format!(
            "expected table object, found {}",
            json_kind(&table_value)
        )));
    };
    for field in ["headers", "data"] {
        if !map.contains_key(field) {
            return Err(InputError::InvalidResponse(format!(
                "table object has no `{field}` field"
            )));
        }
    }

    let raw: RawTable = serde_json::from_value(table_value)?;
    Ok(Table::new(raw.headers, raw.data)?)
}

/// Locates `<code>.json` or `<code>.json.gz` inside `dir`, falling back to the
/// newest saved `compl_ai_<code>_<YYYYMMDD_HHMMSS>.json[.gz]`.
pub fn find_response_file(dir: &Path, code: &str) -> Option<PathBuf> {
    let exact = [format!("{code}.json"), format!("{code}.json.gz")]
        .into_iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file());
    if exact.is_some() {
        return exact;
    }

    let newest = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            let (found, stamp) = split_saved_response_name(strip_response_suffixes(name))?;
            (found == code).then(|| (stamp.to_string(), path.clone()))
        })
        .max_by(|a, b| a.0.cmp(&b.0));

    if let Some((stamp, path)) = &newest {
        tracing::debug!(
            category = code,
            stamp = %stamp,
            path = %path.display(),
            "using newest saved response"
        );
    }
    newest.map(|(_, path)| path)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
