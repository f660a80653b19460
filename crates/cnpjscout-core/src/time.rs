use chrono::{DateTime, Local, NaiveDate};

pub const NOT_AVAILABLE: &str = "N/A";

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Renders a founding date the way Brazilian users read it (`dd/mm/yyyy`).
///
/// The calendar date is taken as written, without shifting it into the local
/// timezone. Values that aren't dates are passed through.
pub fn format_founded_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };
    match parse_calendar_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::format_founded_date;

    #[test]
    fn formats_plain_dates() {
        assert_eq!(format_founded_date(Some("2024-03-15")), "15/03/2024");
    }

    #[test]
    fn keeps_the_written_calendar_date_of_timestamps() {
        assert_eq!(
            format_founded_date(Some("2024-03-15T00:00:00Z")),
            "15/03/2024"
        );
        assert_eq!(
            format_founded_date(Some("2024-03-15T23:30:00-03:00")),
            "15/03/2024"
        );
        assert_eq!(
            format_founded_date(Some("2024-03-15 08:00:00")),
            "15/03/2024"
        );
    }

    #[test]
    fn passes_through_unknown_values() {
        assert_eq!(format_founded_date(None), "N/A");
        assert_eq!(format_founded_date(Some("  ")), "N/A");
        assert_eq!(format_founded_date(Some("ontem")), "ontem");
    }
}
