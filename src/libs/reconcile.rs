//! Week-by-week reconciliation.
//!
//! For every week, strictly in order:
//!
//! 1. fetch a fresh ledger snapshot and read the carried balance from it;
//! 2. ask for the week's paid time off;
//! 3. fetch billable, then non-billable entries;
//! 4. compute the balance and write the week's rows;
//! 5. synchronize the ledger.
//!
//! The balance is never carried from one week to the next in memory: step 1
//! reads what step 5 of the previous week committed.

use super::balance::{compute_balance, Balance, WeekRecord};
use super::config::Config;
use super::error::AppError;
use super::ledger::Ledger;
use super::week::Week;
use crate::api::TimeEntrySource;

pub struct Reconciler<'a, S, L> {
    config: &'a Config,
    source: S,
    ledger: L,
}

impl<'a, S, L> Reconciler<'a, S, L>
where
    S: TimeEntrySource,
    L: Ledger,
{
    pub fn new(config: &'a Config, source: S, ledger: L) -> Self {
        Self { config, source, ledger }
    }

    /// Fills `week` in place and commits it to the ledger.
    ///
    /// `pto` is asked for the week's paid time off after the ledger has been
    /// read and before any entry is fetched.
    pub async fn process_week<F>(&mut self, week: &mut Week, pto: F) -> Result<Balance, AppError>
    where
        F: FnOnce(&Week) -> Result<f64, AppError>,
    {
        let mut sheet = self.ledger.fetch()?;
        let previous = sheet.previous_balance();

        week.pto = pto(week)?;

        let billable = self.source.fetch_entries(week.start, week.end, true).await?;
        let non_billable = self.source.fetch_entries(week.start, week.end, false).await?;
        week.set_entries(billable, non_billable);

        let balance = compute_balance(previous, week);
        let record = WeekRecord::new(week, &balance, &self.config.employee, &self.config.category);
        sheet.append_week(&record);
        self.ledger.synchronize(&sheet)?;

        Ok(balance)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}
