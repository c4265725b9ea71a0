// src/cli.rs

use clap::Parser;

use std::path::PathBuf;

use crate::config::{self, Params};
use crate::error::Result;
use crate::net::Fetcher;
use crate::runner::{self, Progress, RunSummary};
use crate::specs;

/// Scrape ESPNcricinfo Statsguru tables for one player.
#[derive(Parser, Debug)]
#[command(name = "statsguru_scrape", version, about)]
pub struct Args {
    /// ESPNcricinfo player id (e.g. 625371).
    #[arg(long = "player_id")]
    pub player_id: u64,

    /// Output directory.
    #[arg(long = "out_dir", default_value = config::DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Delay between requests, in seconds.
    #[arg(long, default_value_t = config::DEFAULT_SLEEP_SECS)]
    pub sleep: f64,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let out_dir = std::path::absolute(&args.out_dir)?;
    let params = Params::new(args.player_id, out_dir, args.sleep);

    let specs_list = specs::enumerate_specs();
    println!("Player ID: {}", params.player_id);
    println!("Total query specs to try: {}", specs_list.len());
    println!("Output dir: {}", params.out_dir.display());

    let fetcher = Fetcher::new(params.sleep)?;
    let mut progress = CliProgress::default();
    let summary = runner::run_specs(&params, &specs_list, &fetcher, Some(&mut progress))?;

    print_summary(&summary);
    Ok(())
}

/// Prints one line per attempted page.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn page_done(&mut self, key: &str, tables: usize) {
        self.done += 1;
        println!("[{}/{}] {key}: {tables} tables", self.done, self.total);
    }

    fn page_failed(&mut self, url: &str, _error: &str) {
        self.done += 1;
        println!("[{}/{}] FAILED {url}", self.done, self.total);
    }
}

fn print_summary(summary: &RunSummary) {
    println!(
        "\nSaved {} tables across {} pages.",
        summary.tables(),
        summary.pages.len()
    );

    if !summary.failures.is_empty() {
        println!(
            "\n{} requests failed (often due to unsupported view/class combos).",
            summary.failures.len()
        );
        for (url, msg) in summary.failures.iter().take(8) {
            let first_line = msg.lines().next().unwrap_or("");
            println!("- FAIL: {url}\n  {first_line}");
        }
        if let Some(log) = &summary.failure_log {
            println!("Full failure log: {}", log.display());
        }
    }

    println!("\nDone.");
}
