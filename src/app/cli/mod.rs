//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use crate::app::api::{self, ComposeRequest};
use crate::domain::AppError;

/// Exit code for argument errors.
const USAGE_EXIT_CODE: i32 = 1;

#[derive(Parser)]
#[command(name = "olm-bundle")]
#[command(version)]
#[command(
    about = "Compose a versioned OLM operator bundle from deploy manifests",
    long_about = None
)]
struct Cli {
    /// Bundle configuration file (defaults to ./bundle.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory receiving the <version>/ bundle directory
    output_dir: PathBuf,
    /// Version of the bundle being replaced (e.g. 0.1.40-abc123)
    previous_version: String,
    /// Commit count since the base version
    git_num_commits: String,
    /// Commit hash appended to the version
    git_hash: String,
    /// Operator image reference for the deployment
    operator_image: String,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(USAGE_EXIT_CODE),
            }
        }
    };

    if let Err(e) = run_compose(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_compose(cli: Cli) -> Result<(), AppError> {
    let config = api::load_config(cli.config.as_deref())?;
    let request = ComposeRequest {
        output_dir: cli.output_dir,
        previous_version: cli.previous_version,
        commit_count: cli.git_num_commits,
        commit_hash: cli.git_hash,
        image: cli.operator_image,
    };

    println!("Generating CSV for version: {}", request.version(&config));
    let outcome = api::compose(&config, &request)?;
    println!("✅ Wrote ClusterServiceVersion: {}", outcome.csv_path.display());
    Ok(())
}
