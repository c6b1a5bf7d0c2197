//! CLI command implementations

pub mod profile;
