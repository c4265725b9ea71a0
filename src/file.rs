// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::{Result, ScrapeError};
use crate::table::Table;

/// Replace every run of characters outside `[A-Za-z0-9._-]` with a single
/// `_`, trim surrounding whitespace first, and cap the result at 180 chars.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_sub = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
            out.push(ch);
            last_sub = false;
        } else if !last_sub {
            out.push('_');
            last_sub = true;
        }
    }
    // Output is ASCII only, so a byte cut cannot split a code point.
    out.truncate(180);
    out
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write every table of one page as `{key}__table{n}.csv` in `out_dir`,
/// numbering from 1. Existing files are overwritten without warning.
/// Returns the paths written.
pub fn export_page(out_dir: &Path, key: &str, tables: &[Table]) -> Result<Vec<PathBuf>> {
    ensure_directory(out_dir)?;
    let mut written = Vec::with_capacity(tables.len());
    for (i, table) in tables.iter().enumerate() {
        let name = sanitize_filename(&format!("{key}__table{}.csv", i + 1));
        let path = out_dir.join(name);
        write_table_csv(&path, table)?;
        written.push(path);
    }
    Ok(written)
}

/// One CSV per table: header row first, then the data rows.
pub fn write_table_csv(path: &Path, table: &Table) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(&table.headers)?;
    for row in &table.rows {
        w.write_record(row)?;
    }
    w.flush()?;
    Ok(())
}

/// Full failure log: one block of `url`, message, separator line per entry.
pub fn write_failures(path: &Path, failures: &[(String, String)]) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for (url, msg) in failures {
        writeln!(out, "{url}")?;
        writeln!(out, "{msg}")?;
        writeln!(out, "{}", "-".repeat(80))?;
    }
    out.flush()?;
    Ok(())
}
