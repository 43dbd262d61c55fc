//! Clients for external time-tracking services.
//!
//! The reconciler only depends on [`TimeEntrySource`]; [`harvest::Harvest`]
//! is the production implementation.

use crate::libs::error::AppError;
use crate::libs::week::TimeEntry;
use chrono::NaiveDate;

pub mod harvest;

pub use harvest::{Harvest, HarvestConfig};

/// Source of time entries for a date range.
#[allow(async_fn_in_trait)]
pub trait TimeEntrySource {
    /// Fetches the entries logged between `start` and `end`, both inclusive,
    /// restricted to billable or non-billable work.
    ///
    /// # Errors
    ///
    /// Transport failures and non-success responses are
    /// [`AppError::Network`]/[`AppError::HttpStatus`]; a body that is not the
    /// expected JSON is [`AppError::Decode`]. All of them end the run.
    async fn fetch_entries(&mut self, start: NaiveDate, end: NaiveDate, billable: bool) -> Result<Vec<TimeEntry>, AppError>;
}
