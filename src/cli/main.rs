//! profile-cli: column profiling and candidate key discovery for JSON tables

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use data_profiling_sdk::cli::OutputFormat;
use data_profiling_sdk::cli::commands::profile::{ProfileArgs, handle_profile};

#[derive(Parser)]
#[command(
    name = "profile-cli",
    version,
    about = "Profile the columns of a JSON table and find its candidate keys"
)]
struct Cli {
    /// JSON file mapping table names to arrays of row objects
    database: PathBuf,

    /// Table to profile
    table: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// TOML file with profiling configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Test column combinations in parallel
    #[arg(long)]
    parallel: bool,

    /// Largest column combination to test (0 = no limit)
    #[arg(long)]
    max_key_size: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors exit with 1 rather than clap's default of 2
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let args = ProfileArgs {
        database: cli.database,
        table: cli.table,
        format: cli.format,
        config: cli.config,
        parallel: cli.parallel,
        max_key_size: cli.max_key_size,
    };

    if let Err(e) = handle_profile(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
