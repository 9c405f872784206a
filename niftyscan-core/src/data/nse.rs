//! NSE index quote provider.
//!
//! Fetches one snapshot from the exchange's `equity-stockIndices` endpoint.
//! The endpoint rejects requests that do not look like they come from a
//! browser, so the configured User-Agent, Accept-Language and Referer
//! headers are attached to every request. One attempt only.

use super::provider::{DataError, QuoteProvider, Snapshot};
use crate::config::SourceConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// HTTP provider for the NSE index API (or anything serving the same shape).
pub struct NseProvider {
    client: reqwest::blocking::Client,
    url: String,
}

impl NseProvider {
    pub fn new(config: &SourceConfig) -> Result<Self, DataError> {
        let headers = Self::header_map(config)?;

        let mut builder = reqwest::blocking::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| DataError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn header_map(config: &SourceConfig) -> Result<HeaderMap, DataError> {
        let mut map = HeaderMap::new();
        for (name, value) in config.headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| DataError::InvalidConfig(format!("header name {name:?}: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| DataError::InvalidConfig(format!("header {name}: {e}")))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

impl QuoteProvider for NseProvider {
    fn name(&self) -> &str {
        "nse"
    }

    fn fetch(&self) -> Result<Snapshot, DataError> {
        tracing::debug!(url = %self.url, "requesting index snapshot");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = resp
            .text()
            .map_err(|e| DataError::NetworkUnreachable(format!("reading response body: {e}")))?;

        Snapshot::parse_body(&body)
    }
}
