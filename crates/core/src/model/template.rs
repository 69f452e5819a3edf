use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateRow {
    pub name: String,
    pub channel: String,
    pub version: String,
    pub updated: String,
}
