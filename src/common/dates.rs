use chrono::NaiveDate;

/// Canonical format for dates shown to and entered by users.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Formats seen in legacy report data, tried in this order.
const CANDIDATE_FORMATS: &[&str] = &["%m/%d/%Y", "%d/%m/%Y", "%Y-%m-%d", "%y-%m-%d", "%Y/%m/%d"];

/// Parse a free-text date field. First matching format wins; anything
/// unparseable is "no date", never an error.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    CANDIDATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Strict parse against the canonical DD/MM/YYYY format.
pub fn parse_display(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DISPLAY_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_first_when_month_slot_is_invalid() {
        assert_eq!(parse_flexible("15/01/2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn month_first_wins_on_ambiguous_input() {
        // 03/04/2024 is valid for both the US and the display format; the
        // candidate order resolves it as the 4th of March.
        assert_eq!(parse_flexible("03/04/2024"), Some(ymd(2024, 3, 4)));
    }

    #[test]
    fn iso_variants() {
        assert_eq!(parse_flexible("2024-01-05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_flexible("2024/01/05"), Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_flexible(" 15/01/2024 "), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn unparseable_input_is_no_date() {
        assert_eq!(parse_flexible(""), None);
        assert_eq!(parse_flexible("   "), None);
        assert_eq!(parse_flexible("not a date"), None);
        assert_eq!(parse_flexible("32/01/2024"), None);
    }

    #[test]
    fn display_format_is_strict() {
        assert_eq!(parse_display("15/01/2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_display("2024-01-15"), None);
    }
}
