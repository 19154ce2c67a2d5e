//! `chalk migrate` - rewrite older canvas files as version 2.

use std::path::PathBuf;

use clap::Args;

use crate::codec::{self, needs_migration, read_record, write_record};
use crate::discovery::{scan_paths, Config};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// Rewrite older canvas files in the current format
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Canvas files or directories to scan
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

/// Counts from a migration run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MigrateSummary {
    pub migrated: usize,
    pub current: usize,
    pub failed: usize,
}

pub fn run(args: MigrateArgs, config: &Config, printer: &Printer) -> Result<MigrateSummary> {
    let mut summary = MigrateSummary::default();

    for file in scan_paths(&args.paths, config) {
        let display = display_path(&file);
        let record = match read_record(&file) {
            Ok(record) => record,
            Err(e) => {
                printer.error("Skipped", &format!("{}: {}", display, e));
                summary.failed += 1;
                continue;
            }
        };

        if !needs_migration(&record) {
            summary.current += 1;
            continue;
        }

        let canvas = match codec::decode(&record) {
            Ok(canvas) => canvas,
            Err(e) => {
                printer.error("Skipped", &format!("{}: {}", display, e));
                summary.failed += 1;
                continue;
            }
        };

        let from = record
            .version
            .map_or_else(|| "legacy".to_string(), |v| format!("v{}", v));
        if args.dry_run {
            printer.info("Would migrate", &format!("{} ({} -> v2)", display, from));
        } else {
            write_record(&file, &codec::encode(&canvas))?;
            printer.status("Migrated", &format!("{} ({} -> v2)", display, from));
        }
        summary.migrated += 1;
    }

    let verb = if args.dry_run { "Checked" } else { "Finished" };
    printer.status(
        verb,
        &format!(
            "{} migrated, {} current, {} skipped",
            plural(summary.migrated, "canvas", "canvases"),
            summary.current,
            summary.failed
        ),
    );

    Ok(summary)
}
