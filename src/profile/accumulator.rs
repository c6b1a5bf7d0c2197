//! Per-column statistics accumulation

use std::collections::HashSet;

use serde_json::Value;

use super::canonical::{NULL_SENTINEL, canonical_string};
use super::descriptor::{ColumnDescriptor, ColumnType};
use super::kind::{ValueKind, classify};

/// Running numeric range for a column
#[derive(Debug, Clone, Default)]
struct NumericRange {
    min: f64,
    max: f64,
    seen: bool,
}

impl NumericRange {
    fn add(&mut self, value: f64) {
        if !self.seen {
            self.min = value;
            self.max = value;
            self.seen = true;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
    }
}

/// Statistics accumulator for a single column
///
/// Consumes the column's value from every row and is turned into a
/// [`ColumnDescriptor`] once all rows have been seen.
#[derive(Debug, Clone, Default)]
pub struct ColumnAccumulator {
    column_type: Option<ColumnType>,
    non_null_count: usize,
    max_length: usize,
    numeric: NumericRange,
    distinct: HashSet<String>,
}

impl ColumnAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one row's value for this column
    pub fn update(&mut self, value: &Value) {
        self.observe(Some(value));
    }

    /// Observe one row's value, where `None` means the row lacks the column
    pub fn observe(&mut self, value: Option<&Value>) {
        let value = match value {
            Some(v) if !v.is_null() => v,
            _ => {
                self.distinct.insert(NULL_SENTINEL.to_string());
                return;
            }
        };

        self.non_null_count += 1;
        self.distinct.insert(canonical_string(value));

        let kind = classify(value);
        self.unify_type(kind);

        // Range and length keep being tracked after the column turns Mixed;
        // the descriptor decides whether to surface them.
        match value {
            Value::Number(n) => {
                if let Some(f) = n.as_f64() {
                    self.numeric.add(f);
                }
            }
            Value::String(s) => {
                self.max_length = self.max_length.max(s.len());
            }
            _ => {}
        }
    }

    fn unify_type(&mut self, kind: ValueKind) {
        let observed = ColumnType::from(kind);
        self.column_type = match self.column_type {
            None => Some(observed),
            Some(current) if current == observed => Some(current),
            Some(_) => Some(ColumnType::Mixed),
        };
    }

    /// Current column type, `Unknown` while no non-null value has been seen
    pub fn column_type(&self) -> ColumnType {
        self.column_type.unwrap_or(ColumnType::Unknown)
    }

    /// Number of non-null values observed
    pub fn non_null_count(&self) -> usize {
        self.non_null_count
    }

    /// Number of distinct canonical values observed, null counted once
    pub fn distinct_count(&self) -> usize {
        self.distinct.len()
    }

    /// Build the column descriptor for a table of `total_rows` rows
    pub fn descriptor(&self, total_rows: usize) -> ColumnDescriptor {
        let column_type = self.column_type();
        let distinct_count = self.distinct.len();

        let (min, max) = if column_type == ColumnType::Number && self.numeric.seen {
            (Some(self.numeric.min), Some(self.numeric.max))
        } else {
            (None, None)
        };
        let max_length = (column_type == ColumnType::String).then_some(self.max_length);

        ColumnDescriptor {
            column_type,
            non_null_count: self.non_null_count,
            distinct_count,
            candidate_key: distinct_count == total_rows && self.non_null_count == total_rows,
            min,
            max,
            max_length,
        }
    }
}
