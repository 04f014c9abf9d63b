use super::models::{
    DashboardRow, MutationOutcome, Report, ReportCreate, ReportCreated, ReportUpdate, VesselStats,
};
use super::services;
use crate::common::dates;
use crate::common::errors::AppError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing, Json, Router,
};
use sea_orm::DatabaseConnection;

pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/", routing::get(get_all).post(create_one))
        .route("/stats", routing::get(get_stats))
        .route("/dashboard", routing::get(get_dashboard))
        .route("/vessel/:vessel", routing::get(get_by_vessel))
        .route("/:id", routing::put(update_one).delete(delete_one))
        .with_state(db)
}

/// Required fields and date shapes are checked here, ahead of the store: the
/// store itself stays permissive. Blank dates are legal (open reports carry
/// no closed_date).
fn validate_write(day: &str, vessel: &str, permasalahan: &str, closed_date: &str) -> Result<(), AppError> {
    if vessel.trim().is_empty() {
        return Err(AppError::Validation("vessel must not be empty".to_string()));
    }
    if permasalahan.trim().is_empty() {
        return Err(AppError::Validation(
            "permasalahan must not be empty".to_string(),
        ));
    }
    if !day.trim().is_empty() && dates::parse_display(day).is_none() {
        return Err(AppError::Validation(format!(
            "day '{day}' is not a DD/MM/YYYY date"
        )));
    }
    if !closed_date.trim().is_empty() && dates::parse_display(closed_date).is_none() {
        return Err(AppError::Validation(format!(
            "closed_date '{closed_date}' is not a DD/MM/YYYY date"
        )));
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/reports",
    responses((status = OK, body = [Report]))
)]
pub async fn get_all(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<Report>>, AppError> {
    let objs = services::get_all(&db).await?;
    Ok(Json(objs.into_iter().map(Report::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/reports/vessel/{vessel}",
    responses((status = OK, body = [Report]))
)]
pub async fn get_by_vessel(
    State(db): State<DatabaseConnection>,
    Path(vessel): Path<String>,
) -> Result<Json<Vec<Report>>, AppError> {
    let objs = services::get_by_vessel(&db, &vessel).await?;
    Ok(Json(objs.into_iter().map(Report::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/reports",
    responses((status = CREATED, body = ReportCreated))
)]
pub async fn create_one(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<ReportCreate>,
) -> Result<(StatusCode, Json<ReportCreated>), AppError> {
    validate_write(
        &payload.day,
        &payload.vessel,
        &payload.permasalahan,
        &payload.closed_date,
    )?;
    let id = services::create_one(&db, payload).await?;
    tracing::info!(id, "laporan created");
    Ok((StatusCode::CREATED, Json(ReportCreated { id })))
}

#[utoipa::path(
    put,
    path = "/api/reports/{id}",
    responses((status = OK, body = MutationOutcome))
)]
pub async fn update_one(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<ReportUpdate>,
) -> Result<Json<MutationOutcome>, AppError> {
    validate_write(
        &payload.day,
        &payload.vessel,
        &payload.permasalahan,
        &payload.closed_date,
    )?;
    let rows_affected = services::update_one(&db, id, payload).await?;
    Ok(Json(MutationOutcome { rows_affected }))
}

#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    responses((status = OK, body = MutationOutcome))
)]
pub async fn delete_one(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<MutationOutcome>, AppError> {
    let rows_affected = services::delete_one(&db, id).await?;
    Ok(Json(MutationOutcome { rows_affected }))
}

#[utoipa::path(
    get,
    path = "/api/reports/stats",
    responses((status = OK, body = [VesselStats]))
)]
pub async fn get_stats(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<VesselStats>>, AppError> {
    Ok(Json(services::get_stats(&db).await?))
}

#[utoipa::path(
    get,
    path = "/api/reports/dashboard",
    responses((status = OK, body = [DashboardRow]))
)]
pub async fn get_dashboard(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<DashboardRow>>, AppError> {
    Ok(Json(services::get_dashboard(&db).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_required_fields() {
        assert!(validate_write("", "", "engine fault", "").is_err());
        assert!(validate_write("", "KRI A", "  ", "").is_err());
        assert!(validate_write("", "KRI A", "engine fault", "").is_ok());
    }

    #[test]
    fn rejects_malformed_dates_but_allows_blank_ones() {
        assert!(validate_write("15/01/2024", "KRI A", "p", "16/01/2024").is_ok());
        assert!(validate_write("", "KRI A", "p", "").is_ok());
        assert!(validate_write("2024-01-15", "KRI A", "p", "").is_err());
        assert!(validate_write("", "KRI A", "p", "January 16").is_err());
    }
}
