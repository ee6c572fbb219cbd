//! # Non-interactive Lookups
//!
//! One-shot (`pinpoint 110001`) and batch (codes on stdin) modes. Both feed
//! input through the same [`LookupController`] the interactive screen uses,
//! then print the settled state.

use crate::lookup::controllers::LookupController;
use crate::lookup::models::{LookupState, QueryStatus};
use crate::lookup::services::PincodeDirectory;
use crate::lookup::views::format_outcome;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// How settled results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Cards,
    Json,
}

/// Look up one code and print the outcome. Returns whether it succeeded.
pub async fn run_once<D: PincodeDirectory>(
    directory: D,
    code: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    let mut controller = LookupController::new(directory);
    lookup_and_print(&mut controller, code, format, out).await
}

/// Look up every line of `input` in order. Returns how many lookups failed.
///
/// Lines that do not sanitize to a complete pincode are reported and
/// counted as failures.
pub async fn run_batch<D: PincodeDirectory>(
    directory: D,
    input: impl BufRead,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<usize> {
    let mut controller = LookupController::new(directory);
    let mut failures = 0;

    for line in input.lines() {
        let line = line.context("Failed to read pincode from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        if !lookup_and_print(&mut controller, &line, format, out).await? {
            failures += 1;
        }
    }
    Ok(failures)
}

async fn lookup_and_print<D: PincodeDirectory>(
    controller: &mut LookupController<D>,
    raw: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    controller.clear();
    if !controller.set_input(raw) {
        writeln!(out, "{}: not a 6-digit pincode", raw.trim())?;
        return Ok(false);
    }
    controller.wait_until_settled().await;

    let state = controller.state();
    print_state(state, format, out)?;
    Ok(state.status == QueryStatus::Success)
}

fn print_state(state: &LookupState, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    if state.status == QueryStatus::Success && format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &state.results)?;
        writeln!(out)?;
        return Ok(());
    }

    for line in format_outcome(state) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
