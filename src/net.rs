// src/net.rs

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config;
use crate::error::{Result, ScrapeError};

/// Blocking HTTP fetcher with a fixed pause after every request.
pub struct Fetcher {
    client: Client,
    delay: Duration,
}

impl Fetcher {
    pub fn new(delay: Duration) -> Result<Fetcher> {
        let mut headers = HeaderMap::new();
        for (name, value) in config::REQUEST_HEADERS {
            headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        }
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config::REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Fetcher { client, delay })
    }

    /// GET `url` and return the body. Sleeps for the configured delay
    /// whether the request succeeded or not, so pacing holds across
    /// failures too. Anything but status 200 is an error.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let outcome = self.get(url);
        thread::sleep(self.delay);
        outcome
    }

    fn get(&self, url: &str) -> Result<String> {
        tracing::debug!(%url, "GET");
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        if status != 200 {
            return Err(ScrapeError::status(status, url, &body));
        }
        Ok(body)
    }
}
