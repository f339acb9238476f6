//! Foldsplit CLI - write a train/val split for one cross-validation fold
//!
//! Reads a dataset descriptor, shuffles its training manifest into K folds
//! and writes fold 0 as `<train_stem>_fold<K>.txt` / `<val_stem>_fold<K>.txt`.

mod commands;
mod config;

use clap::Parser;
use commands::split::SplitRequest;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Generate fold-specific train/val manifests from a base dataset YAML
#[derive(Parser, Debug)]
#[command(name = "foldsplit", author, version, about)]
struct Args {
    /// Path to base dataset YAML
    #[arg(long = "data_yaml", visible_alias = "data-yaml")]
    data_yaml: PathBuf,

    /// Number of folds (default 2, or from config)
    #[arg(long)]
    folds: Option<usize>,

    /// Random seed (default 0, or from config)
    #[arg(long)]
    seed: Option<u64>,

    /// Also write `<descriptor>_fold<K>.yaml` pointing at the new manifests
    #[arg(long)]
    write_yaml: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_config = config::load_config();

    let level = match args.log_level.as_deref().unwrap_or_else(|| cli_config.log_level_or_default()) {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let request = SplitRequest {
        data_yaml: args.data_yaml,
        folds: args.folds.unwrap_or_else(|| cli_config.folds_or_default()),
        seed: args.seed.unwrap_or_else(|| cli_config.seed_or_default()),
        write_descriptor: args.write_yaml || cli_config.write_descriptor.unwrap_or(false),
        json: args.json,
    };

    commands::split::execute(&request)
}
