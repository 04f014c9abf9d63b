use super::db;
use super::models::{DashboardRow, ReportCreate, ReportUpdate, VesselStats, STATUS_CLOSED, STATUS_OPEN};
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Order, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

/// OPEN rows sort ahead of everything else wherever reports are listed.
fn open_before_closed() -> SimpleExpr {
    Expr::case(Expr::col(db::Column::Status).eq(STATUS_OPEN), 1)
        .finally(2)
        .into()
}

fn count_with_status(status: &str) -> SimpleExpr {
    Expr::expr(Expr::case(Expr::col(db::Column::Status).eq(status), 1).finally(0)).sum()
}

pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<db::Model>, DbErr> {
    db::Entity::find()
        .order_by(open_before_closed(), Order::Asc)
        .order_by(db::Column::CreatedAt, Order::Desc)
        .all(db)
        .await
}

pub async fn get_by_vessel(db: &DatabaseConnection, vessel: &str) -> Result<Vec<db::Model>, DbErr> {
    db::Entity::find()
        .filter(db::Column::Vessel.eq(vessel.to_uppercase()))
        .order_by(open_before_closed(), Order::Asc)
        .order_by(db::Column::CreatedAt, Order::Desc)
        .all(db)
        .await
}

/// Insert one report and return its id. Vessel and unit are stored
/// upper-cased; required-field checks are the caller's job.
pub async fn create_one(db: &DatabaseConnection, report: ReportCreate) -> Result<i32, DbErr> {
    let now = chrono::Utc::now().naive_utc();
    let model = db::ActiveModel {
        id: NotSet,
        day: Set(report.day),
        vessel: Set(report.vessel.to_uppercase()),
        permasalahan: Set(report.permasalahan),
        penyelesaian: Set(report.penyelesaian),
        unit: Set(report.unit.to_uppercase()),
        issued_date: Set(report.issued_date),
        closed_date: Set(report.closed_date),
        keterangan: Set(report.keterangan),
        status: Set(report.status),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let res = db::Entity::insert(model).exec(db).await?;
    Ok(res.last_insert_id)
}

/// Replace every mutable field of the row matching `id` and refresh
/// `updated_at`. An unknown id affects zero rows and is not an error.
pub async fn update_one(
    db: &DatabaseConnection,
    id: i32,
    report: ReportUpdate,
) -> Result<u64, DbErr> {
    let model = db::ActiveModel {
        id: NotSet,
        day: Set(report.day),
        vessel: Set(report.vessel.to_uppercase()),
        permasalahan: Set(report.permasalahan),
        penyelesaian: Set(report.penyelesaian),
        unit: Set(report.unit.to_uppercase()),
        issued_date: Set(report.issued_date),
        closed_date: Set(report.closed_date),
        keterangan: Set(report.keterangan),
        status: Set(report.status),
        created_at: NotSet,
        updated_at: Set(chrono::Utc::now().naive_utc()),
    };
    let res = db::Entity::update_many()
        .set(model)
        .filter(db::Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

pub async fn delete_one(db: &DatabaseConnection, id: i32) -> Result<u64, DbErr> {
    let res = db::Entity::delete_many()
        .filter(db::Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Per-vessel totals for the dashboard, vessel ascending.
pub async fn get_stats(db: &DatabaseConnection) -> Result<Vec<VesselStats>, DbErr> {
    db::Entity::find()
        .select_only()
        .column(db::Column::Vessel)
        .column_as(db::Column::Id.count(), "total")
        .column_as(count_with_status(STATUS_OPEN), "open_count")
        .column_as(count_with_status(STATUS_CLOSED), "closed_count")
        .column_as(db::Column::CreatedAt.max(), "last_activity")
        .group_by(db::Column::Vessel)
        .order_by(db::Column::Vessel, Order::Asc)
        .into_model::<VesselStats>()
        .all(db)
        .await
}

pub async fn get_dashboard(db: &DatabaseConnection) -> Result<Vec<DashboardRow>, DbErr> {
    db::Entity::find()
        .select_only()
        .columns([
            db::Column::Id,
            db::Column::Day,
            db::Column::Vessel,
            db::Column::Permasalahan,
            db::Column::Penyelesaian,
            db::Column::Unit,
            db::Column::IssuedDate,
            db::Column::ClosedDate,
            db::Column::Keterangan,
            db::Column::Status,
            db::Column::CreatedAt,
        ])
        .order_by(db::Column::CreatedAt, Order::Desc)
        .into_model::<DashboardRow>()
        .all(db)
        .await
}
