//! Subcommand implementations.
//!
//! Structural failures (unreadable or unparseable files, missing columns)
//! propagate as errors; data-quality findings (invalid numerics, missing
//! values, duplicates) are printed and never abort a run.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use csvclean_core::aggregate::{aggregate_count, aggregate_sum, count_rows_to_table};
use csvclean_core::audit::{audit, render_report};
use csvclean_core::dedupe::dedupe;
use csvclean_core::merge::merge;
use csvclean_ingest::{list_csv_files, load_table, write_table};
use csvclean_model::Table;

use crate::cli::{AuditArgs, CountArgs, DedupeArgs, ListArgs, MergeArgs, SumArgs};
use crate::summary::{print_audit_summary, print_dedupe_stats, print_sum_stats, print_table};

pub fn run_list(args: &ListArgs) -> Result<()> {
    let files = list_csv_files(&args.dir)?;
    if files.is_empty() {
        println!("No CSV files found in '{}'.", args.dir.display());
        return Ok(());
    }
    for path in files {
        println!("{}", path.display());
    }
    Ok(())
}

pub fn run_count(args: &CountArgs) -> Result<()> {
    let table = load_table(&args.file)?;
    let rows = aggregate_count(&table, &args.by)?;
    info!(groups = rows.len(), "aggregated row counts");
    let result = count_rows_to_table(&rows, &args.by);
    deliver(&result, args.output.as_deref())
}

pub fn run_sum(args: &SumArgs) -> Result<()> {
    let table = load_table(&args.file)?;
    let aggregation = aggregate_sum(&table, &args.by, &args.value)?;
    info!(
        groups = aggregation.rows.len(),
        valid = aggregation.valid_count,
        invalid = aggregation.invalid.len(),
        "aggregated sums"
    );
    let result = aggregation.to_table(&args.by);
    deliver(&result, args.output.as_deref())?;
    print_sum_stats(&aggregation);
    Ok(())
}

pub fn run_dedupe(args: &DedupeArgs) -> Result<()> {
    let table = load_table(&args.file)?;
    let before = table.row_count();
    let outcome = dedupe(&table, &args.by)?;
    deliver(&outcome.table, args.output.as_deref())?;
    print_dedupe_stats(before, &outcome);
    Ok(())
}

pub fn run_audit(args: &AuditArgs) -> Result<()> {
    let table = load_table(&args.file)?;
    let report = audit(&table);
    print_audit_summary(&report);
    if let Some(path) = &args.report {
        std::fs::write(path, render_report(&report))
            .with_context(|| format!("write report '{}'", path.display()))?;
        println!("Detailed report saved to '{}'.", path.display());
    }
    Ok(())
}

pub fn run_merge(args: &MergeArgs) -> Result<()> {
    let left = load_table(&args.left)?;
    let right = load_table(&args.right)?;
    let merged = merge(&left, &right, &args.on)?;
    deliver(&merged, args.output.as_deref())
}

/// Writes the result table when a destination was given, otherwise prints
/// a preview to stdout.
fn deliver(table: &Table, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            write_table(table, path)?;
            println!(
                "Saved {} rows to '{}'.",
                table.row_count(),
                path.display()
            );
        }
        None => print_table(table),
    }
    Ok(())
}
