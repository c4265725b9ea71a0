// src/specs.rs
//! # Query specs
//!
//! Statsguru exposes one player page that re-renders as dozens of different
//! reports depending on its query string. This module owns that query
//! convention and enumerates the candidate reports worth fetching.
//!
//! ## The query convention
//! Parameters are joined with `;`, not `&`:
//!
//! ```text
//! /ci/engine/player/625371.html?class=3;template=results;type=fielding;view=dismissal_summary
//! ```
//!
//! The site wants `class` first when present, then `template=results`
//! (always), then `type`, then `view`, then anything else. Deviating from
//! that order tends to get the default batting summary back instead of the
//! requested report.
//!
//! ## Format classes
//! `class` selects the match format: 1 Tests, 2 ODIs, 3 T20Is, 4 first-class,
//! 5 List A, 6 all T20. The mapping is approximate and shifts per view, so
//! the code treats class codes as opaque integers rather than an enum.
//!
//! ## What the enumerator produces
//! Every category crossed with the core views, plus fielding's dismissal
//! summary and a handful of extra views, one spec per class code. Combos the
//! site does not support fetch fine and simply contain no tables, so the
//! sweep errs on the side of breadth. The list is deterministic, built
//! offline, and de-duplicated while keeping first-seen order.

use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Format codes to sweep.
pub const CLASSES: RangeInclusive<u8> = 1..=6;

const PRIMARY_VIEWS: [&str; 2] = ["innings", "results"];
const EXTRA_VIEWS: [&str; 3] = ["career", "match", "series"];

/// Report family on the player page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Batting,
    Bowling,
    Fielding,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Batting, Category::Bowling, Category::Fielding];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Batting => "batting",
            Category::Bowling => "bowling",
            Category::Fielding => "fielding",
        }
    }
}

/// One candidate report page. Built once during enumeration, read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub category: Category,
    pub view: Option<String>,
    pub class: Option<u8>,
    /// Extra query params, emitted after `view` in insertion order.
    pub extra: Vec<(String, String)>,
}

impl QuerySpec {
    pub fn new(category: Category, view: &str, class: u8) -> QuerySpec {
        QuerySpec {
            category,
            view: Some(view.to_string()),
            class: Some(class),
            extra: Vec::new(),
        }
    }

    /// Grouping key for one fetched page, also the CSV base name.
    /// Absent fields read "none".
    pub fn page_key(&self) -> String {
        format!(
            "type={}__view={}__class={}",
            self.category.as_str(),
            self.view.as_deref().unwrap_or("none"),
            self.class
                .map_or_else(|| "none".to_string(), |c| c.to_string()),
        )
    }

    /// De-duplication identity: every field, extra params sorted.
    fn identity(&self) -> (Category, Option<String>, Option<u8>, Vec<(String, String)>) {
        let mut extra = self.extra.clone();
        extra.sort();
        (self.category, self.view.clone(), self.class, extra)
    }
}

/// Build the full candidate list. Pure and deterministic; two calls give
/// identical output.
pub fn enumerate_specs() -> Vec<QuerySpec> {
    let mut specs = Vec::new();

    // Core per-format reports.
    for class in CLASSES {
        for category in Category::ALL {
            for view in PRIMARY_VIEWS {
                specs.push(QuerySpec::new(category, view, class));
            }
        }
        specs.push(QuerySpec::new(Category::Fielding, "dismissal_summary", class));
    }

    // Aggregate breakdowns; supported for some combos only.
    for class in CLASSES {
        for view in EXTRA_VIEWS {
            for category in Category::ALL {
                specs.push(QuerySpec::new(category, view, class));
            }
        }
    }

    dedup_specs(specs)
}

/// Drop duplicate specs, keeping first-seen order.
fn dedup_specs(specs: Vec<QuerySpec>) -> Vec<QuerySpec> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(specs.len());
    for spec in specs {
        if seen.insert(spec.identity()) {
            out.push(spec);
        }
    }
    out
}

/// Build the page URL for one spec.
pub fn make_url(base_url: &str, player_id: u64, spec: &QuerySpec) -> String {
    let mut params: Vec<String> = Vec::new();
    if let Some(class) = spec.class {
        params.push(format!("class={class}"));
    }
    params.push("template=results".to_string());
    params.push(format!("type={}", spec.category.as_str()));
    if let Some(view) = &spec.view {
        params.push(format!("view={view}"));
    }
    for (k, v) in &spec.extra {
        params.push(format!("{k}={v}"));
    }
    format!(
        "{base_url}/ci/engine/player/{player_id}.html?{}",
        params.join(";")
    )
}
