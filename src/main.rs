use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use navpatch::{preview, PatchOptions, Patcher, DEFAULT_TARGET};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Swift file to patch
    #[arg(default_value = DEFAULT_TARGET)]
    target: PathBuf,

    /// Show the resulting diff without writing the file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Fail without writing if any pass replaced nothing
    #[arg(short, long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    navpatch::init_with_logger(navpatch::default_log_level(cli.verbose))?;

    let patcher = Patcher::new(&cli.target);
    let options = PatchOptions {
        dry_run: cli.dry_run,
        strict: cli.strict,
    };

    let report = patcher
        .run(options)
        .with_context(|| format!("Failed to patch {}", cli.target.display()))?;

    println!("{}", report.status_line());

    if !report.is_changed() {
        info!("No changes made to {}", cli.target.display());
    } else if report.written {
        info!("Patched {}", cli.target.display());
    }

    if cli.dry_run {
        let stats = preview::change_stats(&report.original, &report.content);
        info!(
            "Dry run: {} insertion(s), {} deletion(s)",
            stats.insertions, stats.deletions
        );
        print!(
            "{}",
            preview::unified_diff(&cli.target, &report.original, &report.content)
        );
    }

    Ok(())
}
