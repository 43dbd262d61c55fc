//! Core library modules for hourledger.
//!
//! ## Layout
//!
//! - **Date handling**: [`dates`] resolves user input into week boundaries
//! - **Weeks**: [`week`] partitions a range into weeks and sums their hours
//! - **Balance**: [`balance`] computes the running over/under and the ledger rows
//! - **Ledger**: [`ledger`] stores the rows, [`reconcile`] drives one week at a time
//! - **Infrastructure**: configuration, data storage, secrets, messages, errors
//! - **Presentation**: [`view`] and [`formatter`]

pub mod balance;
pub mod config;
pub mod data_storage;
pub mod dates;
pub mod error;
pub mod formatter;
pub mod ledger;
pub mod messages;
pub mod reconcile;
pub mod secret;
pub mod view;
pub mod week;
