//! Data Profiling SDK - Column statistics and candidate key discovery
//!
//! Provides:
//! - Tolerant loading of JSON databases (table name to array of row objects)
//! - Per-column type, null, distinct, range and length statistics
//! - Single- and multi-column candidate key detection
//! - CLI support (behind the `cli` feature)

pub mod cli;
pub mod profile;

// Re-export commonly used types
pub use profile::{
    ColumnDescriptor, ColumnType, Database, DescriptorSet, InputIssue, ParsedDatabase,
    ProfileConfig, ProfileError, Table, TableProfiler, profile_table,
};
