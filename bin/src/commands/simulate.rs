//! Simulate command implementation.
//!
//! Runs a batch of sleep-based operations on a bounded number of concurrent
//! workers, feeds every finished operation to a tracker and shows the
//! tracker's projection on a progress bar.

use crate::display::{eta_message, print_summary};
use anyhow::{Context, Result, ensure};
use clap::Args;
use futures::{StreamExt, stream};
use indicatif::{ProgressBar, ProgressStyle};
use lapse_lib::prelude::*;
use std::time::Duration;

/// Arguments for the simulate command.
#[derive(Debug, Clone, Args)]
pub(crate) struct SimulateArgs {
    /// Number of operations in the batch
    #[arg(short, long, default_value = "200")]
    pub(crate) total: usize,

    /// Finished operations kept for the running average
    #[arg(short, long, default_value = "20")]
    pub(crate) capacity: usize,

    /// Maximum operations in flight
    #[arg(short, long, default_value = "8")]
    pub(crate) workers: usize,

    /// Shortest synthetic operation in milliseconds
    #[arg(long, default_value = "5")]
    pub(crate) min_ms: u64,

    /// Longest synthetic operation in milliseconds
    #[arg(long, default_value = "50")]
    pub(crate) max_ms: u64,

    /// Print the final tracker snapshot as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

/// Run the simulation and print a summary of the tracker.
pub(crate) async fn simulate(args: SimulateArgs, quiet: bool) -> Result<()> {
    ensure!(args.workers > 0, "--workers must be at least 1");
    ensure!(
        args.min_ms <= args.max_ms,
        "--min-ms ({}) must not exceed --max-ms ({})",
        args.min_ms,
        args.max_ms
    );

    tracing::debug!(
        total = args.total,
        capacity = args.capacity,
        workers = args.workers,
        "starting simulation"
    );
    let config = TrackerConfig::new("simulate", args.total).with_capacity(args.capacity);
    let tracker =
        BoundedOperationTracker::from_config(config).context("Invalid tracker configuration")?;

    // Setup progress bar
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(args.total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ops ({percent}%) {msg}")
                .context("Invalid progress template")?
                .progress_chars("=>-"),
        );
        pb.set_message("ETA unknown");
        pb
    };

    let sink = TracingSink;
    let sinks: [&dyn LogSink; 1] = [&sink];
    let timer = DurationGuard::new(format!("simulated {} operations", args.total), &sinks);

    run_batch(&tracker, &args, &progress).await?;
    progress.finish_with_message("done");
    drop(timer);

    let snapshot = tracker.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_summary(&snapshot);
    }

    Ok(())
}

/// Spawn every operation as its own task, at most `workers` at a time, so
/// `accept` is called from the runtime's worker threads.
async fn run_batch(
    tracker: &BoundedOperationTracker,
    args: &SimulateArgs,
    progress: &ProgressBar,
) -> Result<()> {
    let mut results = stream::iter(0..args.total)
        .map(|index| {
            tokio::spawn(run_operation(
                tracker.clone(),
                index,
                synthetic_duration(index, args.min_ms, args.max_ms),
            ))
        })
        .buffer_unordered(args.workers);

    while let Some(result) = results.next().await {
        result
            .context("Operation task failed")?
            .context("Tracker rejected operation")?;
        progress.inc(1);
        progress.set_message(eta_message(tracker));
    }
    Ok(())
}

/// Time one synthetic operation and hand it to the tracker.
async fn run_operation(
    tracker: BoundedOperationTracker,
    index: usize,
    duration: Duration,
) -> lapse_lib::Result<()> {
    let mut op = Operation::new(format!("op-{index:05}"));
    op.start();
    tokio::time::sleep(duration).await;
    op.end();
    tracker.accept(op)
}

/// Deterministic duration in `[min_ms, max_ms]` for the operation at `index`.
pub(crate) fn synthetic_duration(index: usize, min_ms: u64, max_ms: u64) -> Duration {
    let spread = (max_ms - min_ms).saturating_add(1);
    let jitter = (index as u64).wrapping_mul(7919) % spread;
    Duration::from_millis(min_ms + jitter)
}
