use crate::table::Cell;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    Valid(f64),
    NotAvailable,
    Invalid,
}

pub trait CellClassifier {
    fn classify(&self, cell: &Cell) -> Classification;
}

/// Scores are valid on the closed interval `[min, max]`; no clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeClassifier {
    pub min: f64,
    pub max: f64,
}

impl Default for RangeClassifier {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl CellClassifier for RangeClassifier {
    fn classify(&self, cell: &Cell) -> Classification {
        // "n/a" must be recognised before any numeric check.
        if is_not_available(cell) {
            return Classification::NotAvailable;
        }
        match cell {
            Cell::Number(v) if v.is_finite() && *v >= self.min && *v <= self.max => {
                Classification::Valid(*v)
            }
            _ => Classification::Invalid,
        }
    }
}

fn is_not_available(cell: &Cell) -> bool {
    match cell {
        Cell::Text(s) => s.is_empty() || s.eq_ignore_ascii_case("n/a"),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/classify.rs"]
mod tests;
