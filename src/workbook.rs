// src/workbook.rs

use std::collections::HashSet;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::file::sanitize_filename;
use crate::table::Table;

/// Hard sheet-name limit in the xlsx format.
const SHEET_NAME_MAX: usize = 31;
/// Shorter cap for keys that get a per-table `_{n}` suffix.
const SHEET_BASE_MAX: usize = 25;

/// Write all pages into one workbook, one sheet per table, header row bold.
/// Sheet names come from the page key, truncated and de-duplicated.
pub fn write_workbook(path: &Path, pages: &[(String, Vec<Table>)]) -> Result<()> {
    let mut book = Workbook::new();
    let bold = Format::new().set_bold();
    let mut used: HashSet<String> = HashSet::new();

    for (key, tables) in pages {
        let multi = tables.len() > 1;
        for (i, table) in tables.iter().enumerate() {
            let base = sheet_base_name(key, multi, i + 1);
            let name = unique_sheet_name(&base, &mut used);
            let sheet = book.add_worksheet();
            sheet.set_name(name.as_str())?;
            for (c, header) in table.headers.iter().enumerate() {
                sheet.write_string_with_format(0, c as u16, header.as_str(), &bold)?;
            }
            for (r, row) in table.rows.iter().enumerate() {
                for (c, cell) in row.iter().enumerate() {
                    sheet.write_string((r + 1) as u32, c as u16, cell.as_str())?;
                }
            }
        }
    }

    book.save(path)?;
    Ok(())
}

/// Sanitized sheet name for one table. Single-table pages use the key
/// truncated to the 31-char limit; multi-table pages truncate to 25 first
/// to leave room for the `_{n}` ordinal suffix.
fn sheet_base_name(key: &str, multi: bool, ordinal: usize) -> String {
    let mut name = sanitize_filename(key);
    if multi {
        name.truncate(SHEET_BASE_MAX);
        name.push_str(&format!("_{ordinal}"));
    }
    name.truncate(SHEET_NAME_MAX);
    name
}

/// Truncation makes collisions routine (six class codes can share one
/// 31-char prefix), and xlsx rejects duplicate names. First use keeps
/// `base`; later uses get `_{n}` with n counting from 2, shortened to fit.
fn unique_sheet_name(base: &str, used: &mut HashSet<String>) -> String {
    if used.insert(base.to_string()) {
        return base.to_string();
    }
    for n in 2usize.. {
        let suffix = format!("_{n}");
        let mut name = base.to_string();
        name.truncate(SHEET_NAME_MAX.saturating_sub(suffix.len()));
        name.push_str(&suffix);
        if used.insert(name.clone()) {
            return name;
        }
    }
    unreachable!("sheet name space exhausted")
}
