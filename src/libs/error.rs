//! Unified error type for the reconciliation pipeline.
//!
//! Every failure here is fatal to the current run: the error travels up with
//! `?` to `main`, which prints it and exits. Nothing is retried and rows that
//! were already synchronized to the ledger are left in place.
//!
//! An unparsable previous balance is deliberately absent from this enum; it
//! is recovered where it is read (see [`crate::libs::balance::parse_previous`]).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Configuration
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Date input
    // ---------------------------
    #[error("Invalid date '{input}': {reason}")]
    DateParse { input: String, reason: String },

    // ---------------------------
    // Time-tracking service
    // ---------------------------
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    // ---------------------------
    // Ledger storage
    // ---------------------------
    #[error("Ledger error: {0}")]
    Ledger(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Console input
    // ---------------------------
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl AppError {
    pub fn date(input: &str, reason: impl ToString) -> Self {
        AppError::DateParse {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
