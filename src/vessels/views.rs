use super::models::{SummaryParams, VesselBoard};
use super::services;
use crate::common::errors::AppError;
use axum::{
    extract::{Query, State},
    routing, Json, Router,
};
use sea_orm::DatabaseConnection;

pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/summary", routing::get(get_summary))
        .with_state(db)
}

#[utoipa::path(
    get,
    path = "/api/vessels/summary",
    responses((status = OK, body = VesselBoard))
)]
pub async fn get_summary(
    Query(params): Query<SummaryParams>,
    State(db): State<DatabaseConnection>,
) -> Result<Json<VesselBoard>, AppError> {
    let rows = crate::reports::services::get_dashboard(&db).await?;
    Ok(Json(services::build_board(&rows, &params)))
}
