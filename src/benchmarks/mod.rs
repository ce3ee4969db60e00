pub mod defs;
pub mod loader;
pub mod mapping;

use serde::{Deserialize, Serialize};

pub use defs::builtin_catalogue;
pub use loader::load_catalogue;
pub use mapping::{ColumnMap, resolve_benchmark_columns, resolve_model_column};

/// A benchmark as it appears in one dashboard category.
///
/// `name` is the exact header text, `key` a stable identifier that survives
/// renames of the display text, `category` the sub-group used for averaging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkDefinition {
    pub name: String,
    pub key: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub code: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    pub benchmarks: Vec<BenchmarkDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    pub categories: Vec<CategoryDef>,
}

impl Catalogue {
    pub fn category(&self, code: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.code == code)
    }

    pub fn codes(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.code.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/benchmarks/tests.rs"]
mod tests;
