//! Candidate key detection over column combinations
//!
//! The search is exhaustive: every combination of two or more columns is
//! tested, including supersets of combinations already known to be keys.
//! Cost is `O(2^n * rows * n)` for `n` columns.

use std::collections::HashSet;

use tracing::debug;

use super::canonical::write_canonical;
use super::config::ProfileConfig;
use super::error::ProfileError;
use super::table::Table;

/// Largest column count the combination search can enumerate
pub const MAX_KEY_SEARCH_COLUMNS: usize = 63;

/// Separator between member encodings in a combined key
const KEY_SEPARATOR: &str = "||";

/// Check whether the given columns jointly identify every row of a table
///
/// A row that lacks any of the columns, or holds null in one of them,
/// disqualifies the whole combination. An empty table or an empty column
/// list is never a key.
pub fn is_candidate_key<S: AsRef<str>>(table: &Table, columns: &[S]) -> bool {
    if table.is_empty() || columns.is_empty() {
        return false;
    }

    let mut combinations: HashSet<String> = HashSet::with_capacity(table.len());
    for row in table.rows() {
        let mut key = String::new();
        for (i, column) in columns.iter().enumerate() {
            let value = match row.get(column.as_ref()) {
                Some(v) if !v.is_null() => v,
                _ => return false,
            };
            if i > 0 {
                key.push_str(KEY_SEPARATOR);
            }
            write_canonical(value, &mut key);
        }
        combinations.insert(key);
    }

    combinations.len() == table.len()
}

/// Enumerate every combination of two or more columns
///
/// Combinations are produced in bitmask order (mask `1..2^n`, bit `i`
/// selecting `columns[i]`), and members keep the order of `columns`.
pub fn column_subsets(columns: &[String]) -> Result<Vec<Vec<String>>, ProfileError> {
    let masks = subset_masks(columns.len(), 0)?;
    Ok(masks.map(|mask| select(columns, mask)).collect())
}

/// Find every column combination of size two or more that is a candidate key
pub fn find_multi_column_keys(
    table: &Table,
    columns: &[String],
    config: &ProfileConfig,
) -> Result<Vec<Vec<String>>, ProfileError> {
    if !config.multi_column_keys {
        return Ok(Vec::new());
    }

    let masks = subset_masks(columns.len(), config.max_key_size)?;
    debug!(
        "Searching {} columns for multi-column candidate keys",
        columns.len()
    );

    #[cfg(feature = "parallel")]
    if config.parallel {
        use rayon::prelude::*;

        let masks: Vec<u64> = masks.collect();
        debug!("Testing {} column combinations in parallel", masks.len());
        return Ok(masks
            .par_iter()
            .filter_map(|&mask| {
                let subset = select(columns, mask);
                is_candidate_key(table, &subset).then_some(subset)
            })
            .collect());
    }

    let mut keys = Vec::new();
    let mut tested = 0usize;
    for mask in masks {
        tested += 1;
        let subset = select(columns, mask);
        if is_candidate_key(table, &subset) {
            keys.push(subset);
        }
    }
    debug!("Tested {} column combinations, {} keys", tested, keys.len());

    Ok(keys)
}

/// Masks of all combinations with at least two members, within the size limit
fn subset_masks(
    column_count: usize,
    max_key_size: usize,
) -> Result<impl Iterator<Item = u64>, ProfileError> {
    if column_count > MAX_KEY_SEARCH_COLUMNS {
        return Err(ProfileError::TooManyColumns {
            count: column_count,
            max: MAX_KEY_SEARCH_COLUMNS,
        });
    }

    let max_mask: u64 = if column_count == 0 {
        0
    } else {
        (1u64 << column_count) - 1
    };

    Ok((1..=max_mask).filter(move |mask| {
        let size = mask.count_ones() as usize;
        size >= 2 && (max_key_size == 0 || size <= max_key_size)
    }))
}

fn select(columns: &[String], mask: u64) -> Vec<String> {
    columns
        .iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1u64 << bit) != 0)
        .map(|(_, name)| name.clone())
        .collect()
}
