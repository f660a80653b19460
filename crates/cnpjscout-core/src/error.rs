use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("start date {from} cannot be after end date {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
    #[error("invalid window days: {0}")]
    InvalidWindowDays(i64),
    #[error("invalid date format: expected YYYY-MM-DD")]
    InvalidDateFormat,
}
