//! Profile command implementation

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, render};
use crate::profile::{Database, ParsedDatabase, ProfileConfig, ProfileError, TableProfiler};

/// Arguments for the profile command
#[derive(Debug, Clone)]
pub struct ProfileArgs {
    /// Path to the JSON database file
    pub database: PathBuf,
    /// Table to profile
    pub table: String,
    /// Output format
    pub format: OutputFormat,
    /// Optional TOML configuration file
    pub config: Option<PathBuf>,
    /// Force parallel key search on
    pub parallel: bool,
    /// Override the largest column combination to test
    pub max_key_size: Option<usize>,
}

/// Load a JSON database file
pub fn load_database(path: &Path) -> Result<ParsedDatabase, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;

    let document: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| CliError::ParseError(path.to_path_buf(), e.to_string()))?;

    let parsed = Database::from_json(&document);
    if !parsed.issues.is_empty() {
        warn!(
            "Skipped {} malformed entries in {}",
            parsed.issues.len(),
            path.display()
        );
    }
    info!(
        "Loaded {} tables from {}",
        parsed.database.len(),
        path.display()
    );

    Ok(parsed)
}

/// Load profiling configuration, falling back to defaults
pub fn load_config(path: Option<&Path>) -> Result<ProfileConfig, CliError> {
    let Some(path) = path else {
        return Ok(ProfileConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::ConfigError(path.to_path_buf(), e.to_string()))?;
    toml::from_str(&content).map_err(|e| CliError::ConfigError(path.to_path_buf(), e.to_string()))
}

/// Profile the requested table and render the result
pub fn run_profile(args: &ProfileArgs) -> Result<String, CliError> {
    let mut config = load_config(args.config.as_deref())?;
    if args.parallel {
        config.parallel = true;
    }
    if let Some(size) = args.max_key_size {
        config.max_key_size = size;
    }

    let parsed = load_database(&args.database)?;
    let set = TableProfiler::with_config(config)
        .profile(&parsed.database, &args.table)
        .map_err(|source| {
            if matches!(source, ProfileError::TableNotFound(_)) {
                warn!(
                    "Available tables: {}",
                    parsed.database.table_names().join(", ")
                );
            }
            CliError::ProfileError {
                table: args.table.clone(),
                source,
            }
        })?;

    render(&set, args.format)
}

/// Handle the profile command
pub fn handle_profile(args: &ProfileArgs) -> Result<(), CliError> {
    let output = run_profile(args)?;
    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args(database: &Path, table: &str) -> ProfileArgs {
        ProfileArgs {
            database: database.to_path_buf(),
            table: table.to_string(),
            format: OutputFormat::Json,
            config: None,
            parallel: false,
            max_key_size: None,
        }
    }

    #[test]
    fn test_run_profile_json() {
        let db = write_temp(r#"{"users": [{"id": 1, "name": "a"}, {"id": 2, "name": "a"}]}"#);
        let output = run_profile(&args(db.path(), "users")).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["columns"]["id"]["candidateKey"], true);
        assert_eq!(value["columns"]["name"]["candidateKey"], false);
        assert_eq!(value["multiCandidateKeys"], serde_json::json!([["id", "name"]]));
    }

    #[test]
    fn test_missing_file() {
        let result = run_profile(&args(Path::new("/nonexistent/db.json"), "t"));
        assert!(matches!(result, Err(CliError::FileReadError(..))));
    }

    #[test]
    fn test_invalid_json() {
        let db = write_temp("{ not json");
        let result = run_profile(&args(db.path(), "t"));
        assert!(matches!(result, Err(CliError::ParseError(..))));
    }

    #[test]
    fn test_missing_and_empty_tables() {
        let db = write_temp(r#"{"empty": [], "bad": 5}"#);

        let result = run_profile(&args(db.path(), "absent"));
        assert!(matches!(
            result,
            Err(CliError::ProfileError {
                source: ProfileError::TableNotFound(_),
                ..
            })
        ));

        let result = run_profile(&args(db.path(), "empty"));
        assert!(matches!(
            result,
            Err(CliError::ProfileError {
                source: ProfileError::EmptyTable(_),
                ..
            })
        ));

        // A non-array table is kept as an empty table
        let result = run_profile(&args(db.path(), "bad"));
        assert!(matches!(
            result,
            Err(CliError::ProfileError {
                source: ProfileError::EmptyTable(_),
                ..
            })
        ));
    }

    #[test]
    fn test_config_file_and_overrides() {
        let config = write_temp("multiColumnKeys = true\nmaxKeySize = 3\n");
        let loaded = load_config(Some(config.path())).unwrap();
        assert_eq!(loaded.max_key_size, 3);

        let db = write_temp(r#"{"t": [{"a": 1, "b": 1, "c": 1}, {"a": 2, "b": 1, "c": 1}]}"#);
        let mut profile_args = args(db.path(), "t");
        profile_args.config = Some(config.path().to_path_buf());
        profile_args.max_key_size = Some(2);

        let output = run_profile(&profile_args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value["multiCandidateKeys"],
            serde_json::json!([["a", "b"], ["a", "c"]])
        );
    }

    #[test]
    fn test_parallel_flag_matches_sequential() {
        let db = write_temp(
            r#"{"t": [{"a": 1, "b": "x", "c": true}, {"a": 1, "b": "y", "c": true}, {"a": 2, "b": "x", "c": false}]}"#,
        );
        let sequential = run_profile(&args(db.path(), "t")).unwrap();

        let mut parallel_args = args(db.path(), "t");
        parallel_args.parallel = true;
        let parallel = run_profile(&parallel_args).unwrap();

        assert_eq!(sequential, parallel);
        let value: serde_json::Value = serde_json::from_str(&parallel).unwrap();
        assert_eq!(
            value["multiCandidateKeys"],
            serde_json::json!([["a", "b"], ["b", "c"], ["a", "b", "c"]])
        );
    }

    #[test]
    fn test_invalid_config() {
        let config = write_temp("maxKeySize = \"many\"\n");
        assert!(matches!(
            load_config(Some(config.path())),
            Err(CliError::ConfigError(..))
        ));
    }
}
