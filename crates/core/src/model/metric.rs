use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, Result};

/// One dashboard card. All fields are pre-formatted display text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricRecord {
    pub label: String,
    pub value: String,
    pub sublabel: String,
}

impl MetricRecord {
    pub fn new(label: &str, value: &str, sublabel: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            sublabel: sublabel.to_string(),
        }
    }
}

/// Decodes a metrics payload, rejecting anything that is not an array of
/// complete records with unique labels.
pub fn decode_metrics(body: &[u8]) -> Result<Vec<MetricRecord>> {
    let records: Vec<MetricRecord> = serde_json::from_slice(body)
        .map_err(|e| AdminError::Malformed(format!("metrics payload: {e}")))?;
    ensure_unique_labels(&records)?;
    Ok(records)
}

pub fn ensure_unique_labels(records: &[MetricRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.label.as_str()) {
            return Err(AdminError::Malformed(format!(
                "duplicate metric label: {}",
                record.label
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_in_display_order() {
        let record = MetricRecord::new("Delivery Rate", "98.7%", "p95 latency 62ms");
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"label":"Delivery Rate","value":"98.7%","sublabel":"p95 latency 62ms"}"#
        );
    }

    #[test]
    fn decode_accepts_empty_array() {
        assert!(decode_metrics(b"[]").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let err = decode_metrics(br#"[{"label":"x","value":"1"}]"#).unwrap_err();
        assert!(matches!(err, AdminError::Malformed(_)));
    }

    #[test]
    fn decode_rejects_non_array() {
        assert!(decode_metrics(br#"{"data":[]}"#).is_err());
        assert!(decode_metrics(b"not json").is_err());
    }

    #[test]
    fn decode_rejects_duplicate_labels() {
        let body = br#"[
            {"label":"a","value":"1","sublabel":"x"},
            {"label":"a","value":"2","sublabel":"y"}
        ]"#;
        let err = decode_metrics(body).unwrap_err();
        assert!(err.to_string().contains("duplicate metric label: a"));
    }
}
