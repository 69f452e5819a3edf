//! Process-wide demo data. Built once on first use and never mutated.

use std::sync::OnceLock;

use crate::model::metric::MetricRecord;
use crate::model::tenant::TenantRow;
use crate::model::template::TemplateRow;

const METRICS: [(&str, &str, &str); 3] = [
    ("Messages (24h)", "128,420", "+12% vs yesterday"),
    ("Delivery Rate", "98.7%", "p95 latency 62ms"),
    ("Active Tenants", "84", "5 enterprise"),
];

const TENANTS: [(&str, &str, &str, &str); 3] = [
    ("Acme Corp", "Enterprise", "45k", "Active"),
    ("Northwind", "Growth", "12k", "Active"),
    ("Globex", "Starter", "1.2k", "Trial"),
];

const TEMPLATES: [(&str, &str, &str, &str); 3] = [
    ("Welcome Email", "Email", "v5", "2 days ago"),
    ("OTP SMS", "SMS", "v2", "4 hours ago"),
    ("Re-engagement Push", "Push", "v1", "1 week ago"),
];

/// Records served by the demo metrics endpoint, in response order.
pub fn demo_metrics() -> &'static [MetricRecord] {
    static SLOT: OnceLock<Vec<MetricRecord>> = OnceLock::new();
    SLOT.get_or_init(|| {
        METRICS
            .iter()
            .map(|(label, value, sublabel)| MetricRecord::new(label, value, sublabel))
            .collect()
    })
}

pub fn tenants() -> &'static [TenantRow] {
    static SLOT: OnceLock<Vec<TenantRow>> = OnceLock::new();
    SLOT.get_or_init(|| {
        TENANTS
            .iter()
            .map(|(name, plan, sends, status)| TenantRow {
                name: name.to_string(),
                plan: plan.to_string(),
                sends_per_day: sends.to_string(),
                status: status.to_string(),
            })
            .collect()
    })
}

pub fn templates() -> &'static [TemplateRow] {
    static SLOT: OnceLock<Vec<TemplateRow>> = OnceLock::new();
    SLOT.get_or_init(|| {
        TEMPLATES
            .iter()
            .map(|(name, channel, version, updated)| TemplateRow {
                name: name.to_string(),
                channel: channel.to_string(),
                version: version.to_string(),
                updated: updated.to_string(),
            })
            .collect()
    })
}
