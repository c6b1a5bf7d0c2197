//! In-memory table model and tolerant conversion from parsed JSON

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};
use tracing::warn;

use super::error::{InputIssue, ProfileError};
use super::kind::classify;

/// A single record: column name to value
pub type Row = Map<String, Value>;

/// An ordered sequence of rows that need not share the same columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create a table from rows
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// All rows in input order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of the column names of every row, in sorted order
    pub fn column_names(&self) -> Vec<String> {
        let names: BTreeSet<&String> = self.rows.iter().flat_map(|row| row.keys()).collect();
        names.into_iter().cloned().collect()
    }
}

/// Named tables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Database {
    tables: BTreeMap<String, Table>,
}

/// Result of building a database from a JSON document
#[derive(Debug, Clone, Default)]
pub struct ParsedDatabase {
    /// Tables that could be built
    pub database: Database,
    /// Malformed tables or rows that were skipped
    pub issues: Vec<InputIssue>,
}

impl Database {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a table
    pub fn insert(&mut self, name: impl Into<String>, table: Table) {
        self.tables.insert(name.into(), table);
    }

    /// Look up a table by name
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Table names in sorted order
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the database has no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Parse a JSON document text into a database
    ///
    /// Fails only if the text is not valid JSON; shape problems are
    /// reported through [`ParsedDatabase::issues`].
    pub fn from_json_str(text: &str) -> Result<ParsedDatabase, ProfileError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json(&value))
    }

    /// Build a database from a JSON object mapping table names to row arrays
    pub fn from_json(document: &Value) -> ParsedDatabase {
        let mut parsed = ParsedDatabase::default();

        let Some(tables) = document.as_object() else {
            let issue = InputIssue::RootNotObject {
                found: classify(document),
            };
            warn!("{}", issue);
            parsed.issues.push(issue);
            return parsed;
        };

        for (name, data) in tables {
            let table = parse_table(name, data, &mut parsed.issues);
            parsed.database.insert(name.clone(), table);
        }

        parsed
    }
}

/// Convert one table's JSON value into a [`Table`], recording skipped input
fn parse_table(name: &str, data: &Value, issues: &mut Vec<InputIssue>) -> Table {
    let Some(items) = data.as_array() else {
        let issue = InputIssue::TableNotArray {
            table: name.to_string(),
            found: classify(data),
        };
        warn!("{}", issue);
        issues.push(issue);
        return Table::default();
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::Object(row) => rows.push(row.clone()),
            other => {
                let issue = InputIssue::RowNotObject {
                    table: name.to_string(),
                    index,
                    found: classify(other),
                };
                warn!("{}", issue);
                issues.push(issue);
            }
        }
    }

    Table::new(rows)
}
