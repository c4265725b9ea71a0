// src/runner.rs

use std::path::PathBuf;

use crate::{
    config::Params,
    error::Result,
    extract, file,
    net::Fetcher,
    specs::{self, QuerySpec},
    table::{PageMeta, Table},
    workbook,
};

/// Optional progress sink for the frontend (CLI: print lines; tests: count).
pub trait Progress {
    fn begin(&mut self, _total: usize) {}
    fn log(&mut self, _msg: &str) {}
    fn page_done(&mut self, _key: &str, _tables: usize) {}
    fn page_failed(&mut self, _url: &str, _error: &str) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// What a run produced.
pub struct RunSummary {
    /// Page key to normalized tables, in first-seen order.
    pub pages: Vec<(String, Vec<Table>)>,
    /// One (url, message) entry per failed spec, in attempt order.
    pub failures: Vec<(String, String)>,
    pub csv_files: Vec<PathBuf>,
    pub workbook: Option<PathBuf>,
    pub failure_log: Option<PathBuf>,
}

impl RunSummary {
    /// Total tables across all pages.
    pub fn tables(&self) -> usize {
        self.pages.iter().map(|(_, tables)| tables.len()).sum()
    }
}

/// Full default run: enumerate every candidate page and scrape them all.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(params: &Params, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let fetcher = Fetcher::new(params.sleep)?;
    run_specs(params, &specs::enumerate_specs(), &fetcher, progress)
}

/// Scrape the given specs only. Split out from `run` so callers can inject
/// both the spec list and a fetcher pointed at a different base URL.
pub fn run_specs(
    params: &Params,
    specs_list: &[QuerySpec],
    fetcher: &Fetcher,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    file::ensure_directory(&params.out_dir)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(specs_list.len());
    }

    let mut pages: Vec<(String, Vec<Table>)> = Vec::new();
    let mut failures: Vec<(String, String)> = Vec::new();
    let mut csv_files: Vec<PathBuf> = Vec::new();

    for spec in specs_list {
        let url = specs::make_url(&params.base_url, params.player_id, spec);
        let key = spec.page_key();

        // A failed page is recorded and skipped; it never stops the run.
        let html = match fetcher.fetch(&url) {
            Ok(html) => html,
            Err(e) => {
                let msg = e.to_string();
                tracing::debug!(%url, error = %msg, "fetch failed");
                if let Some(p) = progress.as_deref_mut() {
                    p.page_failed(&url, &msg);
                }
                failures.push((url, msg));
                continue;
            }
        };

        let title = extract::page_title(&html);
        let tables = extract::extract_tables(&html);
        if tables.is_empty() {
            // Unsupported view/class combos come back table-less; skip.
            if let Some(p) = progress.as_deref_mut() {
                p.page_done(&key, 0);
            }
            continue;
        }

        let meta = PageMeta::new(url, title, spec);
        let normalized: Vec<Table> = tables
            .into_iter()
            .enumerate()
            .map(|(i, t)| t.with_provenance(i + 1, &meta))
            .collect();

        csv_files.extend(file::export_page(&params.out_dir, &key, &normalized)?);
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(&key, normalized.len());
        }
        record_page(&mut pages, key, normalized);
    }

    /* ---------------- aggregation ---------------- */

    let workbook = if pages.is_empty() {
        None
    } else {
        let path = params
            .out_dir
            .join(format!("player_{}_cricinfo_tables.xlsx", params.player_id));
        workbook::write_workbook(&path, &pages)?;
        tracing::info!(path = %path.display(), "workbook written");
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("\nWrote Excel workbook: {}", path.display()));
        }
        Some(path)
    };

    let failure_log = if failures.is_empty() {
        None
    } else {
        let path = params.out_dir.join("failures.txt");
        file::write_failures(&path, &failures)?;
        Some(path)
    };

    Ok(RunSummary {
        pages,
        failures,
        csv_files,
        workbook,
        failure_log,
    })
}

/// Re-scraping a key replaces its tables in place and keeps its position.
fn record_page(pages: &mut Vec<(String, Vec<Table>)>, key: String, tables: Vec<Table>) {
    match pages.iter_mut().find(|(k, _)| *k == key) {
        Some((_, existing)) => *existing = tables,
        None => pages.push((key, tables)),
    }
}
