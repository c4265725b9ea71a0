// src/config.rs

use std::path::PathBuf;
use std::time::Duration;

// Net
pub const BASE_URL: &str = "https://stats.espncricinfo.com";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Browser-style request headers. Statsguru turns away default client UAs.
pub const REQUEST_HEADERS: [(&str, &str); 4] = [
    (
        "user-agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
         AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    ),
    ("accept-language", "en-US,en;q=0.9"),
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    ),
    ("connection", "keep-alive"),
];

// Pacing
pub const DEFAULT_SLEEP_SECS: f64 = 0.7; // be polite

// Export
pub const DEFAULT_OUT_DIR: &str = "cricinfo_out";

/// Resolved run parameters, threaded through the whole pipeline.
/// `base_url` defaults to the live site; tests point it elsewhere.
#[derive(Debug, Clone)]
pub struct Params {
    pub player_id: u64,
    pub out_dir: PathBuf,
    pub sleep: Duration,
    pub base_url: String,
}

impl Params {
    /// `sleep_secs` below zero (or NaN) is treated as zero.
    pub fn new(player_id: u64, out_dir: PathBuf, sleep_secs: f64) -> Params {
        Params {
            player_id,
            out_dir,
            sleep: Duration::from_secs_f64(sleep_secs.max(0.0)),
            base_url: BASE_URL.to_string(),
        }
    }
}
