//! Column descriptors and descriptor sets

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::kind::ValueKind;

/// Inferred type of a whole column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Number,
    String,
    Boolean,
    Array,
    Object,
    Null,
    /// Two or more kinds were observed among non-null values
    Mixed,
    /// No non-null value was observed
    Unknown,
}

impl ColumnType {
    /// Display name, as emitted in descriptors
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Number => "Number",
            ColumnType::String => "String",
            ColumnType::Boolean => "Boolean",
            ColumnType::Array => "Array",
            ColumnType::Object => "Object",
            ColumnType::Null => "Null",
            ColumnType::Mixed => "Mixed",
            ColumnType::Unknown => "Unknown",
        }
    }
}

impl From<ValueKind> for ColumnType {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Number => ColumnType::Number,
            ValueKind::String => ColumnType::String,
            ValueKind::Boolean => ColumnType::Boolean,
            ValueKind::Array => ColumnType::Array,
            ValueKind::Object => ColumnType::Object,
            ValueKind::Null => ColumnType::Null,
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary statistics for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Unified column type
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Number of rows holding a non-null value
    pub non_null_count: usize,
    /// Number of distinct canonical values, null counted once
    pub distinct_count: usize,
    /// Whether this column alone identifies every row
    pub candidate_key: bool,
    /// Smallest value (Number columns only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Largest value (Number columns only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Longest string length in UTF-8 bytes (String columns only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// Complete profiling result for one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorSet {
    /// Name of the profiled table
    pub table: String,
    /// Number of rows profiled
    pub row_count: usize,
    /// Descriptors keyed by column name
    pub columns: BTreeMap<String, ColumnDescriptor>,
    /// Column subsets (two or more members) that jointly identify every row
    pub multi_candidate_keys: Vec<Vec<String>>,
}

impl DescriptorSet {
    /// Look up the descriptor of a column
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.get(name)
    }

    /// Names of the columns that are candidate keys on their own
    pub fn single_column_keys(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, desc)| desc.candidate_key)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Check whether exactly this column combination was reported as a key
    pub fn has_multi_key(&self, columns: &[&str]) -> bool {
        self.multi_candidate_keys.iter().any(|key| {
            key.len() == columns.len() && key.iter().zip(columns).all(|(a, b)| a == b)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_descriptor() -> ColumnDescriptor {
        ColumnDescriptor {
            column_type: ColumnType::Number,
            non_null_count: 3,
            distinct_count: 3,
            candidate_key: true,
            min: Some(1.0),
            max: Some(3.0),
            max_length: None,
        }
    }

    #[test]
    fn test_descriptor_serializes_camel_case() {
        let json = serde_json::to_value(number_descriptor()).unwrap();
        assert_eq!(json["type"], "Number");
        assert_eq!(json["nonNullCount"], 3);
        assert_eq!(json["candidateKey"], true);
        assert_eq!(json["min"], 1.0);
        assert!(json.get("maxLength").is_none());
    }

    #[test]
    fn test_descriptor_set_lookups() {
        let mut columns = BTreeMap::new();
        columns.insert("id".to_string(), number_descriptor());
        let set = DescriptorSet {
            table: "users".to_string(),
            row_count: 3,
            columns,
            multi_candidate_keys: vec![vec!["a".to_string(), "b".to_string()]],
        };

        assert_eq!(set.single_column_keys(), vec!["id"]);
        assert!(set.has_multi_key(&["a", "b"]));
        assert!(!set.has_multi_key(&["b", "a"]));
        assert!(set.column("missing").is_none());

        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["multiCandidateKeys"][0][1], "b");
        assert_eq!(json["rowCount"], 3);
    }
}
