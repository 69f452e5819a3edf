use std::time::Duration;

use anyhow::Context;
use hsnp_core::error::{AdminError, Result};
use hsnp_core::model::metric::{MetricRecord, decode_metrics};
use hsnp_core::presenter::MetricsSource;

/// Fetches metric records from a demo metrics endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpMetricsSource {
    client: reqwest::Client,
    url: String,
}

impl HttpMetricsSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build metrics http client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MetricsSource for HttpMetricsSource {
    async fn fetch(&self) -> Result<Vec<MetricRecord>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AdminError::Fetch(format!("request {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdminError::Fetch(format!(
                "request {} returned status {status}",
                self.url
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AdminError::Fetch(format!("read body from {}: {e}", self.url)))?;
        decode_metrics(&body)
    }
}
