use super::models::{ImportRow, ImportSummary};
use super::services;
use axum::{extract::State, routing, Json, Router};
use sea_orm::DatabaseConnection;

pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/", routing::post(import_rows))
        .with_state(db)
}

#[utoipa::path(
    post,
    path = "/api/import",
    responses((status = OK, body = ImportSummary))
)]
pub async fn import_rows(
    State(db): State<DatabaseConnection>,
    Json(rows): Json<Vec<ImportRow>>,
) -> Json<ImportSummary> {
    let summary = services::import_rows(&db, rows).await;
    tracing::info!(
        success = summary.success_count,
        failed = summary.error_count,
        "import finished"
    );
    Json(summary)
}
