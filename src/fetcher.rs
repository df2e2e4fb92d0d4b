use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use scraper::Html;

use crate::error::ScrapeError;

/// Thin blocking HTTP wrapper: one GET in, one parsed document out.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("pl-PL,pl;q=0.9"));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Fetcher { client }
    }

    /// GET the URL and parse the body. Transport errors and non-2xx
    /// statuses propagate; there is no retry.
    pub fn fetch_document(&self, url: &str) -> Result<Html, ScrapeError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        let body = response.text()?;
        Ok(Html::parse_document(&body))
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
