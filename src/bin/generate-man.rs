// Writes the etiqueta(1) man page
//
// Usage: generate-man [OUTPUT_DIR]   (defaults to ./man)

use anyhow::{Context, Result};
use clap::CommandFactory;
use etiqueta::cli::Cli;
use std::path::PathBuf;

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer).context("Failed to render man page")?;

    let path = out_dir.join("etiqueta.1");
    std::fs::write(&path, buffer)
        .with_context(|| format!("Failed to write man page: {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
