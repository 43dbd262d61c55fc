//! Resolution of user-entered dates into week boundaries.
//!
//! The start and end prompts accept three forms:
//!
//! - an empty string, meaning "use the default" (Monday of the current week
//!   for the start, the next Sunday for the end);
//! - a one or two digit day of month, interpreted within today's year and month;
//! - a full `YYYY-MM-DD` date.
//!
//! Whatever the form, the result is snapped to the enclosing week: the start
//! moves back to its Monday and the end moves forward to its Sunday.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hourledger::libs::dates::resolve_start;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//! let start = resolve_start("15", today).unwrap();
//! assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
//! ```

use super::error::AppError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Input format for full dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest input treated as a day-of-month shorthand.
const SHORTHAND_MAX_LEN: usize = 2;

/// Walks backward from `date` until it lands on a Monday.
pub fn find_start_date(date: NaiveDate) -> NaiveDate {
    let mut date = date;
    while date.weekday() != Weekday::Mon {
        date = date - Duration::days(1);
    }
    date
}

/// Walks forward from `date` until it lands on a Sunday.
pub fn find_end_date(date: NaiveDate) -> NaiveDate {
    let mut date = date;
    while date.weekday() != Weekday::Sun {
        date = date + Duration::days(1);
    }
    date
}

/// Resolves the start of the reporting period, snapped to a Monday.
pub fn resolve_start(raw: &str, today: NaiveDate) -> Result<NaiveDate, AppError> {
    Ok(find_start_date(parse_raw(raw, today)?))
}

/// Resolves the end of the reporting period, snapped to a Sunday.
///
/// The empty default is the next Sunday counted from `today`, independent of
/// whatever start date was chosen.
pub fn resolve_end(raw: &str, today: NaiveDate) -> Result<NaiveDate, AppError> {
    Ok(find_end_date(parse_raw(raw, today)?))
}

/// Turns the raw input into a concrete date before any snapping.
pub fn parse_raw(raw: &str, today: NaiveDate) -> Result<NaiveDate, AppError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Ok(today);
    }

    if raw.chars().count() <= SHORTHAND_MAX_LEN {
        return parse_day_of_month(raw, today);
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| AppError::date(raw, e))
}

fn parse_day_of_month(raw: &str, today: NaiveDate) -> Result<NaiveDate, AppError> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::date(raw, "expected a day of month"));
    }
    let day: u32 = raw.parse().map_err(|_| AppError::date(raw, "expected a day of month"))?;
    NaiveDate::from_ymd_opt(today.year(), today.month(), day).ok_or_else(|| {
        AppError::date(
            raw,
            format!("day {} does not exist in {}", day, today.format("%B %Y")),
        )
    })
}
