//! Running over/under balance against the weekly quota.
//!
//! ## Formula
//!
//! ```text
//! total      = billable + non-billable + paid time off
//! over/under = total + previous over/under - 37.5
//! ```
//!
//! The previous value comes from the last row of the ledger and is read again
//! for every week, so the ledger stays the single source of truth for the
//! carried balance. A run that aborts halfway can be restarted and picks up
//! from the last synchronized row.
//!
//! This module only computes values; writing them is the ledger's job.

use super::formatter::format_hours;
use super::week::Week;
use crate::msg_debug;

/// Weekly hours target.
pub const WEEKLY_QUOTA: f64 = 37.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    pub previous: f64,
    pub total: f64,
    pub over_under: f64,
}

pub fn compute_balance(previous: f64, week: &Week) -> Balance {
    let total = week.billable_hours() + week.non_billable_hours() + week.pto;
    Balance {
        previous,
        total,
        over_under: (total + previous) - WEEKLY_QUOTA,
    }
}

/// Reads a previous over/under cell.
///
/// A missing, empty or non-numeric cell counts as zero; a header row or a
/// fresh ledger must not stop the run.
pub fn parse_previous(cell: Option<&str>) -> f64 {
    let raw = cell.unwrap_or("").trim();
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            msg_debug!(format!("Previous over/under '{}' is not a number, using 0", raw));
            0.0
        }
    }
}

/// Cells written for one billable entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRow {
    pub label: String,
    pub employee: String,
    pub category: String,
    pub hours: String,
    pub notes: String,
}

/// Cells written once per week, after the entry rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCells {
    pub over_under: String,
    pub pto: String,
    pub non_billable_hours: String,
}

/// Everything a week contributes to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekRecord {
    pub label: String,
    pub employee: String,
    pub category: String,
    pub entries: Vec<EntryRow>,
    pub summary: SummaryCells,
}

impl WeekRecord {
    pub fn new(week: &Week, balance: &Balance, employee: &str, category: &str) -> Self {
        let entries = week
            .billable_entries()
            .iter()
            .map(|entry| EntryRow {
                label: week.label.clone(),
                employee: employee.to_string(),
                category: category.to_string(),
                hours: format_hours(entry.hours),
                notes: entry.notes.clone(),
            })
            .collect();

        Self {
            label: week.label.clone(),
            employee: employee.to_string(),
            category: category.to_string(),
            entries,
            summary: SummaryCells {
                over_under: format_hours(balance.over_under),
                pto: format_hours(week.pto),
                non_billable_hours: format_hours(week.non_billable_hours()),
            },
        }
    }
}
