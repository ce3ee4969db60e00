use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::benchmarks::{Catalogue, CategoryDef};

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("IO error reading catalogue: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalogue is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalogue has no categories")]
    Empty,
    #[error("catalogue category #{0} has an empty code")]
    EmptyCode(usize),
    #[error("duplicate category code in catalogue: {0}")]
    DuplicateCategory(String),
    #[error("duplicate benchmark name in category {category}: {name}")]
    DuplicateBenchmark { category: String, name: String },
}

/// Reads a JSON list of categories, each `{code, endpoint?, benchmarks: [{name, key, category}]}`.
pub fn load_catalogue(path: &Path) -> Result<Catalogue, CatalogueError> {
    let raw = fs::read_to_string(path)?;
    let categories: Vec<CategoryDef> = serde_json::from_str(&raw)?;
    let catalogue = validate_catalogue(categories)?;
    tracing::info!(
        path = %path.display(),
        categories = catalogue.categories.len(),
        "loaded benchmark catalogue"
    );
    Ok(catalogue)
}

pub fn validate_catalogue(categories: Vec<CategoryDef>) -> Result<Catalogue, CatalogueError> {
    if categories.is_empty() {
        return Err(CatalogueError::Empty);
    }

    let mut codes = BTreeSet::new();
    for (idx, category) in categories.iter().enumerate() {
        if category.code.trim().is_empty() {
            return Err(CatalogueError::EmptyCode(idx));
        }
        if !codes.insert(category.code.as_str()) {
            return Err(CatalogueError::DuplicateCategory(category.code.clone()));
        }

        let mut names = BTreeSet::new();
        for def in &category.benchmarks {
            if !names.insert(def.name.as_str()) {
                return Err(CatalogueError::DuplicateBenchmark {
                    category: category.code.clone(),
                    name: def.name.clone(),
                });
            }
        }
        if category.benchmarks.is_empty() {
            tracing::warn!(category = %category.code, "catalogue category lists no benchmarks");
        }
    }

    Ok(Catalogue { categories })
}
