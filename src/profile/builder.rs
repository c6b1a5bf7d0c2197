//! Descriptor set construction

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::accumulator::ColumnAccumulator;
use super::config::ProfileConfig;
use super::descriptor::{ColumnDescriptor, DescriptorSet};
use super::error::ProfileError;
use super::keys::find_multi_column_keys;
use super::table::{Database, Table};

/// Table profiler
///
/// Builds a [`DescriptorSet`] for a table: one descriptor per column plus
/// every multi-column candidate key.
#[derive(Debug, Clone, Default)]
pub struct TableProfiler {
    config: ProfileConfig,
}

impl TableProfiler {
    /// Create a profiler with default configuration
    pub fn new() -> Self {
        Self::with_config(ProfileConfig::default())
    }

    /// Create a profiler with custom configuration
    pub fn with_config(config: ProfileConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// Profile a named table of a database
    pub fn profile(&self, database: &Database, name: &str) -> Result<DescriptorSet, ProfileError> {
        let table = database
            .get(name)
            .ok_or_else(|| ProfileError::TableNotFound(name.to_string()))?;
        self.profile_table(name, table)
    }

    /// Profile a table directly
    pub fn profile_table(&self, name: &str, table: &Table) -> Result<DescriptorSet, ProfileError> {
        if table.is_empty() {
            return Err(ProfileError::EmptyTable(name.to_string()));
        }

        let columns = table.column_names();
        debug!(
            "Profiling table {} ({} rows, {} columns)",
            name,
            table.len(),
            columns.len()
        );

        let descriptors = column_descriptors(table, &columns);
        let multi_candidate_keys = find_multi_column_keys(table, &columns, &self.config)?;

        info!(
            "Profiled table {}: {} columns, {} multi-column keys",
            name,
            descriptors.len(),
            multi_candidate_keys.len()
        );

        Ok(DescriptorSet {
            table: name.to_string(),
            row_count: table.len(),
            columns: descriptors,
            multi_candidate_keys,
        })
    }
}

/// Profile a named table with the default configuration
pub fn profile_table(database: &Database, name: &str) -> Result<DescriptorSet, ProfileError> {
    TableProfiler::new().profile(database, name)
}

/// Accumulate every column over every row; a missing key counts as null
fn column_descriptors(table: &Table, columns: &[String]) -> BTreeMap<String, ColumnDescriptor> {
    let total_rows = table.len();

    columns
        .iter()
        .map(|column| {
            let mut acc = ColumnAccumulator::new();
            for row in table.rows() {
                acc.observe(row.get(column));
            }
            (column.clone(), acc.descriptor(total_rows))
        })
        .collect()
}
