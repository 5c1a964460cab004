//! Contention runner that outputs a markdown table of accept throughput.
//!
//! Run with: `cargo run --package lapse-bench --bin contention_table --release`

use lapse_bench::{ContentionResult, run_contention};

/// Number of iterations per thread count.
const ITERATIONS: usize = 5;

/// Operations submitted by each thread per iteration.
const PER_THREAD: usize = 100_000;

/// Window capacity used for every run.
const CAPACITY: usize = 1_000;

fn main() {
    println!("lapse tracker contention");
    println!("========================\n");
    println!(
        "{ITERATIONS} iterations, {PER_THREAD} operations per thread, window capacity {CAPACITY}\n"
    );

    let mut rows: Vec<(usize, f64)> = Vec::new();
    for threads in [1, 2, 4, 8, 16] {
        let runs: Vec<ContentionResult> = (0..ITERATIONS)
            .map(|_| run_contention(threads, PER_THREAD, CAPACITY))
            .collect();
        let mean = runs.iter().map(ContentionResult::ops_per_sec).sum::<f64>() / runs.len() as f64;
        rows.push((threads, mean));
    }

    println!("| Threads | Accepts/sec | vs 1 thread |");
    println!("|---------|-------------|-------------|");
    let baseline = rows.first().map_or(0.0, |(_, rate)| *rate);
    for (threads, rate) in rows {
        let relative = if baseline > 0.0 { rate / baseline } else { 0.0 };
        println!("| {threads} | {rate:.0} | {relative:.2}x |");
    }
}
