//! Table profiling engine for JSON records
//!
//! Computes per-column statistics for a table of heterogeneous JSON rows
//! and discovers every column combination that uniquely identifies rows.
//!
//! ## Features
//!
//! - **Type unification** - Number, String, Boolean, Array, Object, or Mixed
//! - **Distinct counting** - values compared by canonical encoding, so `1` and `1.0` match
//! - **Range tracking** - numeric min/max and maximum string length
//! - **Candidate keys** - single columns and all multi-column combinations
//!
//! ## Example
//!
//! ```rust
//! use data_profiling_sdk::profile::{Database, TableProfiler};
//!
//! let parsed = Database::from_json_str(
//!     r#"{"orders": [{"a": 1, "b": "x"}, {"a": 1, "b": "y"}, {"a": 2, "b": "x"}]}"#,
//! )
//! .unwrap();
//!
//! let set = TableProfiler::new().profile(&parsed.database, "orders").unwrap();
//! assert!(set.has_multi_key(&["a", "b"]));
//! ```

mod accumulator;
mod builder;
mod canonical;
mod config;
mod descriptor;
mod error;
mod keys;
mod kind;
mod table;

pub use accumulator::ColumnAccumulator;
pub use builder::{TableProfiler, profile_table};
pub use canonical::{NULL_SENTINEL, canonical_string};
pub use config::{ProfileConfig, ProfileConfigBuilder};
pub use descriptor::{ColumnDescriptor, ColumnType, DescriptorSet};
pub use error::{InputIssue, ProfileError};
pub use keys::{MAX_KEY_SEARCH_COLUMNS, column_subsets, find_multi_column_keys, is_candidate_key};
pub use kind::{ValueKind, classify};
pub use table::{Database, ParsedDatabase, Row, Table};
