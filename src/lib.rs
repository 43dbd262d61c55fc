//! # hourledger
//!
//! A command-line utility that reconciles weekly work hours against a
//! 37.5-hour quota and keeps a running over/under balance in a ledger.
//!
//! ## Features
//!
//! - **Week Partitioning**: Turns a date span into Monday-to-Sunday weeks
//! - **Harvest Integration**: Pulls billable and non-billable time entries
//! - **Running Balance**: Carries the over/under from the last ledger row
//! - **Ledger Storage**: Appends one row per billable entry plus weekly totals
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hourledger::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
