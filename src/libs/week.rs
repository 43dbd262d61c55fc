use super::dates::find_end_date;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A single time entry as reported by the time-tracking service.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub notes: String,
    pub hours: f64,
    pub project_id: i64,
    pub task_id: i64,
    pub billable: bool,
}

/// Sums the hours of a set of entries.
pub trait HoursAggregator {
    fn total_hours(&self) -> f64;
}

impl HoursAggregator for [TimeEntry] {
    fn total_hours(&self) -> f64 {
        self.iter().fold(0.0, |acc, entry| acc + entry.hours)
    }
}

pub fn aggregate(entries: &[TimeEntry]) -> f64 {
    entries.total_hours()
}

/// One Monday-to-Sunday reporting unit.
///
/// The hour totals are private and only change through [`Week::set_entries`],
/// so they always match the entries they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub pto: f64,
    billable_entries: Vec<TimeEntry>,
    non_billable_entries: Vec<TimeEntry>,
    billable_hours: f64,
    non_billable_hours: f64,
}

impl Week {
    /// Creates an empty week starting on `start`, which must be a Monday.
    pub fn new(start: NaiveDate) -> Self {
        debug_assert_eq!(start.weekday(), Weekday::Mon);
        Self {
            start,
            end: find_end_date(start),
            label: start.format("%-m/%-d/%Y").to_string(),
            pto: 0.0,
            billable_entries: Vec::new(),
            non_billable_entries: Vec::new(),
            billable_hours: 0.0,
            non_billable_hours: 0.0,
        }
    }

    pub fn set_entries(&mut self, billable: Vec<TimeEntry>, non_billable: Vec<TimeEntry>) {
        self.billable_hours = aggregate(&billable);
        self.non_billable_hours = aggregate(&non_billable);
        self.billable_entries = billable;
        self.non_billable_entries = non_billable;
    }

    pub fn billable_entries(&self) -> &[TimeEntry] {
        &self.billable_entries
    }

    pub fn non_billable_entries(&self) -> &[TimeEntry] {
        &self.non_billable_entries
    }

    pub fn billable_hours(&self) -> f64 {
        self.billable_hours
    }

    pub fn non_billable_hours(&self) -> f64 {
        self.non_billable_hours
    }

    /// Console heading, e.g. `Mar  4 2024`.
    pub fn heading(&self) -> String {
        self.start.format("%b %e %Y").to_string()
    }
}

/// Splits `[start, end)` into the weeks whose Monday falls inside it.
///
/// The cursor stops as soon as it reaches `end`, so a week starting exactly
/// on `end` is not included and `partition(d, d)` is empty.
pub fn partition(start: NaiveDate, end: NaiveDate) -> Vec<Week> {
    let mut weeks = Vec::new();
    let mut cursor = start;

    while cursor < end {
        if cursor.weekday() == Weekday::Mon {
            weeks.push(Week::new(cursor));
        }
        cursor = cursor + Duration::days(1);
    }

    weeks
}
