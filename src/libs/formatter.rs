//! Number formatting shared by the ledger and the console view.
//!
//! Every number that ends up in a ledger cell or on screen uses the same
//! fixed two-decimal form, so `8` is written as `8.00` and `-20.5` as `-20.50`.

/// Formats an hour amount with exactly two decimals.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
