use super::models::{StatusFilter, SummaryParams, VesselBoard, VesselSummary};
use crate::common::dates;
use crate::reports::models::{DashboardRow, STATUS_CLOSED, STATUS_OPEN};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Fold the raw dashboard rows into the per-vessel overview. Counting honors
/// the year filter; last_inspection is taken over the full row set.
pub fn build_board(rows: &[DashboardRow], params: &SummaryParams) -> VesselBoard {
    let parsed: Vec<(&DashboardRow, Option<NaiveDate>)> = rows
        .iter()
        .map(|row| (row, dates::parse_flexible(&row.issued_date)))
        .collect();

    let mut years: Vec<i32> = parsed
        .iter()
        .filter_map(|(_, date)| date.map(|d| d.year()))
        .collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();

    let mut last_inspection: BTreeMap<&str, NaiveDate> = BTreeMap::new();
    for (row, date) in &parsed {
        if let Some(date) = date {
            last_inspection
                .entry(row.vessel.as_str())
                .and_modify(|newest| {
                    if date > newest {
                        *newest = *date;
                    }
                })
                .or_insert(*date);
        }
    }

    let in_year = |date: &Option<NaiveDate>| match params.year {
        Some(year) => date.map(|d| d.year() == year).unwrap_or(false),
        None => true,
    };

    let mut total_open = 0i64;
    let mut total_closed = 0i64;
    let mut counts: BTreeMap<&str, (i64, i64)> = BTreeMap::new();
    for (row, date) in &parsed {
        if !in_year(date) {
            continue;
        }
        // Every surviving row registers its vessel; statuses other than
        // OPEN/CLOSED count toward neither column.
        let entry = counts.entry(row.vessel.as_str()).or_insert((0, 0));
        if row.status == STATUS_OPEN {
            entry.0 += 1;
            total_open += 1;
        } else if row.status == STATUS_CLOSED {
            entry.1 += 1;
            total_closed += 1;
        }
    }

    let mut vessels: Vec<VesselSummary> = counts
        .into_iter()
        .map(|(code, (open_count, closed_count))| VesselSummary {
            code: code.to_string(),
            open_count,
            closed_count,
            last_inspection: last_inspection
                .get(code)
                .map(|date| date.format(dates::DISPLAY_FORMAT).to_string()),
        })
        .collect();

    if let Some(query) = params.search.as_deref() {
        let query = query.trim().to_uppercase();
        if !query.is_empty() {
            vessels.retain(|vessel| vessel.code.to_uppercase().contains(&query));
        }
    }

    match params.status {
        StatusFilter::All => {}
        StatusFilter::HasOpen => vessels.retain(|v| v.open_count > 0),
        StatusFilter::AllClosed => vessels.retain(|v| v.open_count == 0 && v.closed_count > 0),
        StatusFilter::NoReports => vessels.retain(|v| v.open_count == 0 && v.closed_count == 0),
    }

    VesselBoard {
        total_open,
        total_closed,
        vessel_count: vessels.len(),
        years,
        vessels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn row(id: i32, vessel: &str, status: &str, issued_date: &str) -> DashboardRow {
        DashboardRow {
            id,
            day: String::new(),
            vessel: vessel.to_string(),
            permasalahan: "problem".to_string(),
            penyelesaian: String::new(),
            unit: String::new(),
            issued_date: issued_date.to_string(),
            closed_date: String::new(),
            keterangan: String::new(),
            status: status.to_string(),
            created_at: timestamp(),
        }
    }

    fn params() -> SummaryParams {
        SummaryParams::default()
    }

    #[test]
    fn groups_by_vessel_in_ascending_order() {
        let rows = vec![
            row(1, "KRI B", "OPEN", "15/01/2024"),
            row(2, "KRI A", "CLOSED", "10/01/2024"),
            row(3, "KRI A", "OPEN", "20/01/2024"),
        ];

        let board = build_board(&rows, &params());
        assert_eq!(board.total_open, 2);
        assert_eq!(board.total_closed, 1);
        assert_eq!(board.vessel_count, 2);
        assert_eq!(board.vessels[0].code, "KRI A");
        assert_eq!(board.vessels[0].open_count, 1);
        assert_eq!(board.vessels[0].closed_count, 1);
        assert_eq!(board.vessels[1].code, "KRI B");
    }

    #[test]
    fn last_inspection_is_newest_parseable_date() {
        let rows = vec![
            row(1, "KRI A", "OPEN", "10/01/2024"),
            row(2, "KRI A", "CLOSED", "20/03/2024"),
            row(3, "KRI A", "CLOSED", "junk"),
        ];

        let board = build_board(&rows, &params());
        assert_eq!(
            board.vessels[0].last_inspection.as_deref(),
            Some("20/03/2024")
        );
    }

    #[test]
    fn vessel_without_parseable_dates_has_no_inspection() {
        let rows = vec![row(1, "KRI A", "OPEN", "")];
        let board = build_board(&rows, &params());
        assert_eq!(board.vessels[0].last_inspection, None);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = vec![
            row(1, "KRI ABC", "OPEN", ""),
            row(2, "KRI XYZ", "OPEN", ""),
        ];
        let mut p = params();
        p.search = Some("abc".to_string());

        let board = build_board(&rows, &p);
        assert_eq!(board.vessel_count, 1);
        assert_eq!(board.vessels[0].code, "KRI ABC");
    }

    #[test]
    fn status_predicates() {
        let rows = vec![
            row(1, "KRI A", "OPEN", ""),
            row(2, "KRI A", "CLOSED", ""),
            row(3, "KRI B", "CLOSED", ""),
            row(4, "KRI C", "PENDING", ""),
        ];

        let mut p = params();
        p.status = StatusFilter::HasOpen;
        let board = build_board(&rows, &p);
        assert_eq!(board.vessels.len(), 1);
        assert_eq!(board.vessels[0].code, "KRI A");

        p.status = StatusFilter::AllClosed;
        let board = build_board(&rows, &p);
        assert_eq!(board.vessels.len(), 1);
        assert_eq!(board.vessels[0].code, "KRI B");

        p.status = StatusFilter::NoReports;
        let board = build_board(&rows, &p);
        assert_eq!(board.vessels.len(), 1);
        assert_eq!(board.vessels[0].code, "KRI C");
    }

    #[test]
    fn year_filter_scopes_counts_but_not_last_inspection() {
        let rows = vec![
            row(1, "KRI A", "OPEN", "15/01/2023"),
            row(2, "KRI A", "CLOSED", "15/01/2024"),
            row(3, "KRI B", "OPEN", "01/06/2023"),
        ];
        let mut p = params();
        p.year = Some(2023);

        let board = build_board(&rows, &p);
        assert_eq!(board.total_open, 2);
        assert_eq!(board.total_closed, 0);
        assert_eq!(board.vessel_count, 2);
        // The 2024 report still drives KRI A's latest inspection.
        assert_eq!(
            board.vessels[0].last_inspection.as_deref(),
            Some("15/01/2024")
        );
        assert_eq!(board.years, vec![2024, 2023]);
    }

    #[test]
    fn rows_without_dates_drop_out_of_year_filtering() {
        let rows = vec![
            row(1, "KRI A", "OPEN", ""),
            row(2, "KRI B", "OPEN", "15/01/2023"),
        ];
        let mut p = params();
        p.year = Some(2023);

        let board = build_board(&rows, &p);
        assert_eq!(board.vessel_count, 1);
        assert_eq!(board.vessels[0].code, "KRI B");
    }

    #[test]
    fn empty_input_builds_an_empty_board() {
        let board = build_board(&[], &params());
        assert_eq!(board.total_open, 0);
        assert_eq!(board.total_closed, 0);
        assert_eq!(board.vessel_count, 0);
        assert!(board.years.is_empty());
        assert!(board.vessels.is_empty());
    }
}
