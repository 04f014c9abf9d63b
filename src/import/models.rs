use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_status() -> String {
    crate::reports::models::STATUS_OPEN.to_string()
}

/// One row of legacy tabular data, keyed by the original column headers.
#[derive(ToSchema, Deserialize, Serialize)]
pub struct ImportRow {
    #[serde(rename = "Day", default)]
    pub day: String,
    #[serde(rename = "Vessel", default)]
    pub vessel: String,
    #[serde(rename = "Permasalahan", default)]
    pub permasalahan: String,
    #[serde(rename = "Penyelesaian", default)]
    pub penyelesaian: String,
    #[serde(rename = "Unit", default)]
    pub unit: String,
    #[serde(rename = "Issued Date", default)]
    pub issued_date: String,
    #[serde(rename = "Closed Date", default)]
    pub closed_date: String,
    #[serde(rename = "Keterangan", default)]
    pub keterangan: String,
    #[serde(rename = "Status", default = "default_status")]
    pub status: String,
}

/// Partial success is expected: rows fail individually and the rest keep
/// going.
#[derive(ToSchema, Serialize)]
pub struct ImportSummary {
    pub total: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub errors: Vec<String>,
}
