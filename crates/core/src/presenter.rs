//! Dashboard card state.
//!
//! A view starts in [`MetricsView::Default`], showing the embedded fallback
//! records, and moves to [`MetricsView::Resolved`] only when a fetch succeeds.
//! Failed fetches leave the view untouched.

use std::future::Future;

use crate::catalog;
use crate::error::Result;
use crate::model::metric::MetricRecord;

/// Something the presenter can ask for the current metric records.
pub trait MetricsSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<MetricRecord>>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MetricsView {
    #[default]
    Default,
    Resolved(Vec<MetricRecord>),
}

impl MetricsView {
    /// Applies the outcome of a fetch. Success replaces the displayed records
    /// wholesale, even with an empty list; failure keeps the current view.
    pub fn transition(self, outcome: Result<Vec<MetricRecord>>) -> Self {
        match outcome {
            Ok(records) => Self::Resolved(records),
            Err(_) => self,
        }
    }

    pub fn records(&self) -> &[MetricRecord] {
        match self {
            Self::Default => fallback_metrics(),
            Self::Resolved(records) => records,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Resolved(_) => "resolved",
        }
    }
}

/// Records shown before (or instead of) a successful fetch.
pub fn fallback_metrics() -> &'static [MetricRecord] {
    catalog::demo_metrics()
}
