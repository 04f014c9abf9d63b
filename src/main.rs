use axum::{routing, Router};
use config::Config;
use sea_orm::DatabaseConnection;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod import;
mod reports;
mod vessels;

#[derive(OpenApi)]
#[openapi(
    paths(
        common::views::healthz,
        reports::views::get_all,
        reports::views::get_by_vessel,
        reports::views::create_one,
        reports::views::update_one,
        reports::views::delete_one,
        reports::views::get_stats,
        reports::views::get_dashboard,
        import::views::import_rows,
        vessels::views::get_summary,
    ),
    components(schemas(
        reports::models::Report,
        reports::models::ReportCreate,
        reports::models::ReportUpdate,
        reports::models::ReportCreated,
        reports::models::MutationOutcome,
        reports::models::VesselStats,
        reports::models::DashboardRow,
        import::models::ImportRow,
        import::models::ImportSummary,
        vessels::models::VesselSummary,
        vessels::models::VesselBoard,
    ))
)]
struct ApiDoc;

fn build_router(db: DatabaseConnection) -> Router {
    Router::new()
        .nest("/api/reports", reports::views::router(db.clone()))
        .nest("/api/vessels", vessels::views::router(db.clone()))
        .nest("/api/import", import::views::router(db))
        .route("/api/healthz", routing::get(common::views::healthz))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    common::db::ensure_parent_dir(&config.db_path)?;

    let db = common::db::init_db(&config.db_url()).await?;
    tracing::info!("database ready at {}", config.db_path);

    let app = build_router(db);

    let addr = format!("{}:{}", config.app_host, config.app_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
