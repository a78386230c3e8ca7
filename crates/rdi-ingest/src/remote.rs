//! Remote CSV fetching over HTTPS.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use rdi_model::CodeTable;

use crate::csv_table::parse_code_table;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch a CSV document and parse it into a [`CodeTable`].
///
/// Non-success statuses are errors; nothing is retried.
pub fn fetch_code_table(url: &str) -> Result<CodeTable> {
    debug!(url, "fetching csv");
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("build http client")?;
    let response = client
        .get(url)
        .header(
            USER_AGENT,
            format!("offense-codes/{}", env!("CARGO_PKG_VERSION")),
        )
        .send()
        .with_context(|| format!("request {url}"))?;
    if !response.status().is_success() {
        return Err(anyhow!("{url}: http status {}", response.status()));
    }
    let body = response
        .text()
        .with_context(|| format!("read body of {url}"))?;
    let table = parse_code_table(body.as_bytes())
        .with_context(|| format!("parse csv from {url}"))?;
    debug!(url, records = table.record_count(), "csv fetched");
    Ok(table)
}
