// src/table.rs

use crate::specs::QuerySpec;

/// Leading columns prepended to every exported table.
pub const PROVENANCE_HEADERS: [&str; 6] = [
    "_table_index",
    "_url",
    "_title",
    "_type",
    "_view",
    "_class",
];

/// One extracted table: a header row plus data rows, all cells text.
/// Rows are rectangular; every row is as wide as the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Drop columns that are empty in every data row, then rows that are
    /// empty in every remaining column. Returns `None` when either
    /// dimension ends up at zero. Header labels do not count as content.
    pub fn prune_empty(mut self) -> Option<Table> {
        if self.headers.is_empty() || self.rows.is_empty() {
            return None;
        }

        let keep: Vec<bool> = (0..self.headers.len())
            .map(|c| {
                self.rows
                    .iter()
                    .any(|row| row.get(c).is_some_and(|cell| !cell.is_empty()))
            })
            .collect();

        if keep.contains(&false) {
            self.headers = keep_columns(self.headers, &keep);
            self.rows = self
                .rows
                .into_iter()
                .map(|row| keep_columns(row, &keep))
                .collect();
        }

        self.rows.retain(|row| row.iter().any(|cell| !cell.is_empty()));

        if self.headers.is_empty() || self.rows.is_empty() {
            return None;
        }
        Some(self)
    }

    /// Prepend the 1-based table ordinal and the page metadata to the
    /// header and to every row. Ordinals are local to one page.
    pub fn with_provenance(self, ordinal: usize, meta: &PageMeta) -> Table {
        let lead = [
            ordinal.to_string(),
            meta.url.clone(),
            meta.title.clone(),
            meta.category.clone(),
            meta.view.clone(),
            meta.class.clone(),
        ];

        let mut headers = Vec::with_capacity(lead.len() + self.headers.len());
        headers.extend(PROVENANCE_HEADERS.iter().map(|h| h.to_string()));
        headers.extend(self.headers);

        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                let mut out = Vec::with_capacity(lead.len() + row.len());
                out.extend(lead.iter().cloned());
                out.extend(row);
                out
            })
            .collect();

        Table { headers, rows }
    }
}

fn keep_columns(cells: Vec<String>, keep: &[bool]) -> Vec<String> {
    cells
        .into_iter()
        .zip(keep)
        .filter_map(|(cell, &k)| k.then_some(cell))
        .collect()
}

/// Provenance stamped onto every row of a page's tables.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub url: String,
    pub title: String,
    pub category: String,
    /// Empty when the page had no view.
    pub view: String,
    /// Empty when the page had no class.
    pub class: String,
}

impl PageMeta {
    pub fn new(url: String, title: String, spec: &QuerySpec) -> PageMeta {
        PageMeta {
            url,
            title,
            category: spec.category.as_str().to_string(),
            view: spec.view.clone().unwrap_or_default(),
            class: spec.class.map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}
