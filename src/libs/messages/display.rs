//! Display implementation for application messages.
//!
//! All user-facing text lives here so that commands only deal with
//! [`Message`] variants and their parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigSavedTo(path) => format!("Configuration saved to {}", path),
            Message::ConfigFileNotFound(path) => format!("Configuration file not found: {}. Run `hourledger init` first.", path),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::ConfigHarvestMissing => "Harvest is not configured. Run `hourledger init` and select Harvest.".to_string(),
            Message::ConfigModuleGeneral => "General settings".to_string(),
            Message::ConfigModuleHarvest => "Harvest settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptStartDate => "Start Date".to_string(),
            Message::PromptEndDate => "End Date".to_string(),
            Message::PromptPto(heading) => format!("PTO/Holiday/Sick leave for week of {}", heading),
            Message::PromptPtoInvalid => "Paid time off must be a non-negative number of hours".to_string(),
            Message::PromptLedgerPath => "Ledger file path".to_string(),
            Message::PromptEmployee => "Employee name".to_string(),
            Message::PromptCategory => "Category".to_string(),
            Message::PromptHarvestSubdomain => "Harvest subdomain".to_string(),
            Message::PromptHarvestUsername => "Harvest username".to_string(),
            Message::PromptHarvestUserId => "Harvest user ID".to_string(),
            Message::PromptHarvestPassword => "Enter your Harvest password".to_string(),

            // === RECONCILIATION MESSAGES ===
            Message::ReportingPeriod(start, end) => format!("Reporting period: {} - {}", start, end),
            Message::NoWeeksInRange(start, end) => format!("No weeks start between {} and {}, nothing to do.", start, end),
            Message::WeekHeader(heading) => format!("Week of {}", heading),
            Message::WeekSummary {
                billable,
                total,
                non_billable,
                pto,
                over_under,
            } => format!(
                "{} | {} Total ({} Non billable hours, {} PTO, {} Over/Under)",
                billable, total, non_billable, pto, over_under
            ),
            Message::WeekSaved(label) => format!("Week of {} written to the ledger", label),
            Message::FetchingEntries(start, end, billable) => format!(
                "Fetching {} entries from {} to {}",
                if *billable { "billable" } else { "non-billable" },
                start,
                end
            ),

            // === LEDGER MESSAGES ===
            Message::LedgerLocation(path) => format!("Ledger: {}", path),
            Message::LedgerEmpty => "The ledger has no rows yet, the balance starts at 0.00".to_string(),
            Message::CurrentBalance(balance) => format!("Current over/under balance: {}", balance),
        };
        write!(f, "{}", text)
    }
}
