#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigSavedTo(String), // path
    ConfigFileNotFound(String),
    ConfigParseError(String),
    ConfigHarvestMissing,
    ConfigModuleGeneral,
    ConfigModuleHarvest,

    // === PROMPTS ===
    PromptSelectModules,
    PromptStartDate,
    PromptEndDate,
    PromptPto(String), // week heading
    PromptPtoInvalid,
    PromptLedgerPath,
    PromptEmployee,
    PromptCategory,
    PromptHarvestSubdomain,
    PromptHarvestUsername,
    PromptHarvestUserId,
    PromptHarvestPassword,

    // === RECONCILIATION MESSAGES ===
    ReportingPeriod(String, String), // start, end
    NoWeeksInRange(String, String),  // start, end
    WeekHeader(String),              // heading
    WeekSummary {
        billable: String,
        total: String,
        non_billable: String,
        pto: String,
        over_under: String,
    },
    WeekSaved(String), // label
    FetchingEntries(String, String, bool),

    // === LEDGER MESSAGES ===
    LedgerLocation(String),
    LedgerEmpty,
    CurrentBalance(String),
}
