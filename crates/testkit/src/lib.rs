use std::time::Duration;

use hsnp_core::error::{AdminError, Result};
use hsnp_core::model::metric::MetricRecord;
use hsnp_core::presenter::MetricsSource;

/// Records that differ from the built-in fallback, so replacement is visible.
pub fn sample_metrics() -> Vec<MetricRecord> {
    vec![
        MetricRecord::new("Messages (1h)", "5,310", "-3% vs last hour"),
        MetricRecord::new("Bounce Rate", "0.4%", "hard bounces only"),
    ]
}

/// Resolves immediately with a fixed list.
#[derive(Debug, Clone)]
pub struct StaticSource(Vec<MetricRecord>);

impl StaticSource {
    pub fn new(records: Vec<MetricRecord>) -> Self {
        Self(records)
    }
}

impl MetricsSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<MetricRecord>> {
        Ok(self.0.clone())
    }
}

/// Resolves with a fixed list after a delay.
#[derive(Debug, Clone)]
pub struct DelayedSource {
    delay: Duration,
    records: Vec<MetricRecord>,
}

impl DelayedSource {
    pub fn new(delay: Duration, records: Vec<MetricRecord>) -> Self {
        Self { delay, records }
    }
}

impl MetricsSource for DelayedSource {
    async fn fetch(&self) -> Result<Vec<MetricRecord>> {
        tokio::time::sleep(self.delay).await;
        Ok(self.records.clone())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FailingSource;

impl MetricsSource for FailingSource {
    async fn fetch(&self) -> Result<Vec<MetricRecord>> {
        Err(AdminError::Fetch("connection refused".to_string()))
    }
}

/// Never resolves.
#[derive(Debug, Clone, Copy)]
pub struct PendingSource;

impl MetricsSource for PendingSource {
    async fn fetch(&self) -> Result<Vec<MetricRecord>> {
        std::future::pending::<Result<Vec<MetricRecord>>>().await
    }
}
