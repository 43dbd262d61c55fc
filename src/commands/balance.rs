use crate::{
    libs::{
        config::Config,
        formatter::format_hours,
        ledger::{CsvLedger, Ledger},
        messages::Message,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use std::path::Path;

pub fn cmd(config_path: Option<&Path>) -> Result<()> {
    let config = Config::read(config_path)?;
    let mut ledger = CsvLedger::new(&config.ledger_path);
    msg_print!(Message::LedgerLocation(ledger.path().display().to_string()));

    let sheet = ledger.fetch()?;
    if sheet.last_row().is_none() {
        msg_info!(Message::LedgerEmpty);
    } else {
        msg_info!(Message::CurrentBalance(format_hours(sheet.previous_balance())));
    }
    Ok(())
}
