use super::models::{ImportRow, ImportSummary};
use crate::reports::models::ReportCreate;
use crate::reports::services as reports;
use sea_orm::DatabaseConnection;

const MAX_REPORTED_ERRORS: usize = 10;

/// Apply the same normalization the legacy migration tool did: trim and
/// upper-case vessel, unit and status, and require the two mandatory fields.
fn map_row(row: ImportRow) -> Result<ReportCreate, String> {
    let vessel = row.vessel.trim().to_uppercase();
    if vessel.is_empty() {
        return Err("missing Vessel".to_string());
    }
    if row.permasalahan.trim().is_empty() {
        return Err("missing Permasalahan".to_string());
    }
    Ok(ReportCreate {
        day: row.day,
        vessel,
        permasalahan: row.permasalahan,
        penyelesaian: row.penyelesaian,
        unit: row.unit.trim().to_uppercase(),
        issued_date: row.issued_date,
        closed_date: row.closed_date,
        keterangan: row.keterangan,
        status: row.status.trim().to_uppercase(),
    })
}

/// Insert rows one at a time; a failed row is counted and reported, never
/// fatal, and already-inserted rows stay committed.
pub async fn import_rows(db: &DatabaseConnection, rows: Vec<ImportRow>) -> ImportSummary {
    let total = rows.len();
    let mut success_count = 0;
    let mut error_count = 0;
    let mut errors = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        let outcome = match map_row(row) {
            Ok(report) => reports::create_one(db, report)
                .await
                .map(|_| ())
                .map_err(|err| err.to_string()),
            Err(err) => Err(err),
        };
        match outcome {
            Ok(()) => success_count += 1,
            Err(err) => {
                error_count += 1;
                tracing::warn!("import row {} failed: {}", index + 1, err);
                if errors.len() < MAX_REPORTED_ERRORS {
                    errors.push(format!("row {}: {}", index + 1, err));
                }
            }
        }
    }

    ImportSummary {
        total,
        success_count,
        error_count,
        errors,
    }
}
