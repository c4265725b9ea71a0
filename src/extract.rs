// src/extract.rs

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use crate::table::Table;

static TABLE: OnceLock<Selector> = OnceLock::new();
static ROW: OnceLock<Selector> = OnceLock::new();
static CELL: OnceLock<Selector> = OnceLock::new();
static TITLE: OnceLock<Selector> = OnceLock::new();

fn table_selector() -> &'static Selector {
    TABLE.get_or_init(|| Selector::parse("table").unwrap())
}

fn row_selector() -> &'static Selector {
    ROW.get_or_init(|| Selector::parse("tr").unwrap())
}

fn cell_selector() -> &'static Selector {
    CELL.get_or_init(|| Selector::parse("th, td").unwrap())
}

fn title_selector() -> &'static Selector {
    TITLE.get_or_init(|| Selector::parse("title").unwrap())
}

/// Parse every `<table>` in the document into a cleaned `Table`.
/// All-empty rows and columns are pruned; tables with nothing left are
/// dropped. No tables at all is a normal outcome, not an error.
pub fn extract_tables(html: &str) -> Vec<Table> {
    let doc = Html::parse_document(strip_doctype(html));
    doc.select(table_selector())
        .filter_map(|el| grid_from(el).and_then(Table::prune_empty))
        .collect()
}

/// The page `<title>`, text nodes trimmed and joined with single spaces.
/// Falls back to a fixed placeholder when the document has none.
pub fn page_title(html: &str) -> String {
    let doc = Html::parse_document(html);
    match doc.select(title_selector()).next() {
        Some(el) => {
            let parts: Vec<&str> = el
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect();
            parts.join(" ")
        }
        None => "cricinfo_page".to_string(),
    }
}

/// Drop a leading `<!DOCTYPE ...>` declaration. Some parsers chase the
/// DTD reference as an external resource; ours does not need it either way.
fn strip_doctype(html: &str) -> &str {
    let trimmed = html.trim_start();
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 9 && bytes[..9].eq_ignore_ascii_case(b"<!doctype") {
        if let Some(end) = trimmed.find('>') {
            return &trimmed[end + 1..];
        }
    }
    html
}

/* ---------------- grid building ---------------- */

struct RawRow {
    cells: Vec<String>,
    all_header: bool,
}

/// Read one `<table>` element into a rectangular `Table`.
///
/// A leading row made entirely of `<th>` cells becomes the header;
/// otherwise headers are the positional labels "0".."N-1". Short rows are
/// padded with empty cells to the widest row.
fn grid_from(table: ElementRef) -> Option<Table> {
    let mut raw: Vec<RawRow> = Vec::new();

    for tr in direct_rows(table) {
        let mut cells = Vec::new();
        let mut all_header = true;
        let mut any = false;
        for cell in direct_cells(tr) {
            any = true;
            if cell.value().name() != "th" {
                all_header = false;
            }
            let text = normalize_ws(&cell.text().collect::<String>());
            // colspan=0 means "rest of row" in HTML; treat it as 1,
            // and cap runaway values.
            let span = cell
                .value()
                .attr("colspan")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(1)
                .clamp(1, 100);
            for _ in 0..span {
                cells.push(text.clone());
            }
        }
        raw.push(RawRow {
            cells,
            all_header: all_header && any,
        });
    }

    let width = raw.iter().map(|r| r.cells.len()).max().unwrap_or(0);
    if width == 0 {
        return None;
    }

    let header_first = raw.first().is_some_and(|r| r.all_header);
    let mut rows_iter = raw.into_iter();

    let headers: Vec<String> = if header_first {
        let mut h = rows_iter.next().map(|r| r.cells).unwrap_or_default();
        h.resize(width, String::new());
        h
    } else {
        (0..width).map(|i| i.to_string()).collect()
    };

    let rows: Vec<Vec<String>> = rows_iter
        .map(|r| {
            let mut cells = r.cells;
            cells.resize(width, String::new());
            cells
        })
        .collect();

    Some(Table { headers, rows })
}

/// Rows belonging to this table, not to a table nested inside it.
fn direct_rows<'a>(table: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    table.select(row_selector()).filter(move |tr| {
        nearest_ancestor(*tr, "table").is_some_and(|el| el.id() == table.id())
    })
}

/// Cells belonging to this row, not to a nested table's rows.
fn direct_cells<'a>(tr: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    tr.select(cell_selector())
        .filter(move |cell| nearest_ancestor(*cell, "tr").is_some_and(|el| el.id() == tr.id()))
}

fn nearest_ancestor<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == name)
}

/// Collapse whitespace runs to single spaces and trim the ends.
fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
