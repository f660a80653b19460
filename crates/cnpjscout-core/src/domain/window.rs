use crate::error::CoreError;
use chrono::{Duration, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: i64 = 180;
pub const MAX_WINDOW_DAYS: i64 = 3660;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive range of founding dates a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    from: NaiveDate,
    to: NaiveDate,
}

impl SearchWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, CoreError> {
        if from > to {
            return Err(CoreError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// The `days` days leading up to and including `today`.
    pub fn last_days(today: NaiveDate, days: i64) -> Result<Self, CoreError> {
        let days = validate_window_days(days)?;
        let from = today
            .checked_sub_signed(Duration::days(days))
            .ok_or(CoreError::InvalidWindowDays(days))?;
        Self::new(from, today)
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn founded_gte(&self) -> String {
        format!("{}T00:00:00Z", self.from.format(DATE_FORMAT))
    }

    pub fn founded_lte(&self) -> String {
        format!("{}T23:59:59Z", self.to.format(DATE_FORMAT))
    }
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if days <= 0 || days > MAX_WINDOW_DAYS {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| CoreError::InvalidDateFormat)
}
