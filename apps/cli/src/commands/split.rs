//! Split command implementation.

use anyhow::{Context, Result};
use colored::Colorize;
use foldsplit_core::{FoldOptions, FoldSplitter};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub data_yaml: PathBuf,
    pub folds: usize,
    pub seed: u64,
    pub write_descriptor: bool,
    pub json: bool,
}

pub fn execute(request: &SplitRequest) -> Result<()> {
    let options = FoldOptions {
        folds: request.folds,
        seed: request.seed,
        write_descriptor: request.write_descriptor,
    };

    let splitter = FoldSplitter::new(&options)?;
    let outputs = splitter
        .run(&request.data_yaml)
        .with_context(|| format!("Failed to split {}", request.data_yaml.display()))?;

    if request.json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    println!();
    println!("{}", format!("Fold 0 of {} (seed {})", request.folds, request.seed).bold().cyan());
    println!(
        "  Train: {} {}",
        outputs.train_path.display().to_string().green(),
        format!("({} lines)", outputs.train_count).dimmed()
    );
    println!(
        "  Val:   {} {}",
        outputs.val_path.display().to_string().green(),
        format!("({} lines)", outputs.val_count).dimmed()
    );
    if let Some(path) = &outputs.descriptor_path {
        println!("  YAML:  {}", path.display().to_string().green());
    }
    println!();
    Ok(())
}
