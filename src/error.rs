// src/error.rs

use thiserror::Error;

/// Everything that can stop a fetch or an export.
///
/// Fetch-level errors (`Status`, `Http`) are recorded per page and never
/// abort the run; the filesystem and workbook variants propagate.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Response with a status other than 200. Carries the leading chunk
    /// of the body, which is usually a human-readable block page.
    #[error("HTTP {status} for {url}\nFirst 300 chars:\n{snippet}")]
    Status {
        status: u16,
        url: String,
        snippet: String,
    },

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("xlsx: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Build a `Status` error, capping the body snippet at 300 chars.
    pub fn status(status: u16, url: impl Into<String>, body: &str) -> Self {
        ScrapeError::Status {
            status,
            url: url.into(),
            snippet: body.chars().take(300).collect(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
