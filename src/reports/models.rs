use chrono::NaiveDateTime;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_OPEN: &str = "OPEN";
pub const STATUS_CLOSED: &str = "CLOSED";

pub(crate) fn default_status() -> String {
    STATUS_OPEN.to_string()
}

#[derive(ToSchema, Serialize)]
pub struct Report {
    id: i32,
    day: String,
    vessel: String,
    permasalahan: String,
    penyelesaian: String,
    unit: String,
    issued_date: String,
    closed_date: String,
    keterangan: String,
    status: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<super::db::Model> for Report {
    fn from(model: super::db::Model) -> Self {
        Self {
            id: model.id,
            day: model.day,
            vessel: model.vessel,
            permasalahan: model.permasalahan,
            penyelesaian: model.penyelesaian,
            unit: model.unit,
            issued_date: model.issued_date,
            closed_date: model.closed_date,
            keterangan: model.keterangan,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Full set of writable fields. Absent fields default to empty strings and an
/// absent status to OPEN; an explicitly empty status is stored as-is.
#[derive(ToSchema, Deserialize, Serialize)]
pub struct ReportCreate {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub vessel: String,
    #[serde(default)]
    pub permasalahan: String,
    #[serde(default)]
    pub penyelesaian: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub issued_date: String,
    #[serde(default)]
    pub closed_date: String,
    #[serde(default)]
    pub keterangan: String,
    #[serde(default = "default_status")]
    pub status: String,
}

/// Updates replace the whole row, so the payload is the same shape as a
/// create; `created_at` is never touched.
#[derive(ToSchema, Deserialize, Serialize)]
pub struct ReportUpdate {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub vessel: String,
    #[serde(default)]
    pub permasalahan: String,
    #[serde(default)]
    pub penyelesaian: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub issued_date: String,
    #[serde(default)]
    pub closed_date: String,
    #[serde(default)]
    pub keterangan: String,
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(ToSchema, Serialize)]
pub struct ReportCreated {
    pub id: i32,
}

/// Mutations against an unknown id succeed with zero rows affected; callers
/// that want strict semantics can check the count.
#[derive(ToSchema, Serialize)]
pub struct MutationOutcome {
    pub rows_affected: u64,
}

#[derive(ToSchema, Serialize, FromQueryResult)]
pub struct VesselStats {
    pub vessel: String,
    pub total: i64,
    pub open_count: i64,
    pub closed_count: i64,
    pub last_activity: NaiveDateTime,
}

/// Raw row set for analytics views, everything except `updated_at`.
#[derive(ToSchema, Serialize, FromQueryResult, Clone)]
pub struct DashboardRow {
    pub id: i32,
    pub day: String,
    pub vessel: String,
    pub permasalahan: String,
    pub penyelesaian: String,
    pub unit: String,
    pub issued_date: String,
    pub closed_date: String,
    pub keterangan: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}
