use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One damage report for a vessel. Text columns are free-form by design:
/// dates are nominal DD/MM/YYYY strings and `status` accepts whatever the
/// caller wrote — validation belongs to the write boundary, not storage.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, ToSchema, Serialize, Deserialize)]
#[sea_orm(table_name = "laporan_kerusakan")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
