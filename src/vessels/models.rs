use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One card on the vessel overview: open/closed counts and the newest
/// parseable issued date, formatted DD/MM/YYYY.
#[derive(ToSchema, Serialize, Debug, PartialEq, Eq)]
pub struct VesselSummary {
    pub code: String,
    pub open_count: i64,
    pub closed_count: i64,
    pub last_inspection: Option<String>,
}

#[derive(ToSchema, Serialize)]
pub struct VesselBoard {
    pub total_open: i64,
    pub total_closed: i64,
    pub vessel_count: usize,
    pub years: Vec<i32>,
    pub vessels: Vec<VesselSummary>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    /// At least one OPEN report.
    HasOpen,
    /// At least one CLOSED report and zero OPEN.
    AllClosed,
    /// Neither an OPEN nor a CLOSED report.
    NoReports,
}

#[derive(Deserialize, Debug, Default)]
pub struct SummaryParams {
    pub search: Option<String>,
    #[serde(default)]
    pub status: StatusFilter,
    pub year: Option<i32>,
}
