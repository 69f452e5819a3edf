use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TenantRow {
    pub name: String,
    pub plan: String,
    pub sends_per_day: String,
    pub status: String,
}
