use crate::{
    api::Harvest,
    libs::{
        config::Config,
        dates::{find_end_date, find_start_date, resolve_end, resolve_start, DATE_FORMAT},
        error::AppError,
        ledger::CsvLedger,
        messages::Message,
        reconcile::Reconciler,
        view::View,
        week::{partition, Week},
    },
    msg_debug, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::Path;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// First day of the period: YYYY-MM-DD or a day of the current month (snapped to Monday)
    #[arg(short, long)]
    start: Option<String>,

    /// Last day of the period: YYYY-MM-DD or a day of the current month (snapped to Sunday)
    #[arg(short, long)]
    end: Option<String>,
}

pub async fn cmd(run_args: RunArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::read(config_path)?;
    let today = Local::now().date_naive();

    let raw_start = match run_args.start {
        Some(raw) => raw,
        None => prompt_date(Message::PromptStartDate, find_start_date(today))?,
    };
    let start = resolve_start(&raw_start, today)?;

    let raw_end = match run_args.end {
        Some(raw) => raw,
        None => prompt_date(Message::PromptEndDate, find_end_date(today))?,
    };
    let end = resolve_end(&raw_end, today)?;

    let start_str = start.format(DATE_FORMAT).to_string();
    let end_str = end.format(DATE_FORMAT).to_string();
    let mut weeks = partition(start, end);
    if weeks.is_empty() {
        msg_warning!(Message::NoWeeksInRange(start_str, end_str));
        return Ok(());
    }
    msg_info!(Message::ReportingPeriod(start_str, end_str));

    let harvest = Harvest::new(config.harvest()?)?;
    let ledger = CsvLedger::new(&config.ledger_path);
    msg_print!(Message::LedgerLocation(ledger.path().display().to_string()));
    println!();

    let mut reconciler = Reconciler::new(&config, harvest, ledger);
    for week in weeks.iter_mut() {
        let balance = reconciler.process_week(week, prompt_pto).await?;
        View::week(week, &balance);
        msg_debug!(Message::WeekSaved(week.label.clone()));
    }

    Ok(())
}

/// Asks for a date, showing the computed default; an empty answer keeps it.
fn prompt_date(prompt: Message, default: NaiveDate) -> Result<String, AppError> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.format(DATE_FORMAT).to_string())
        .interact_text()?)
}

fn prompt_pto(week: &Week) -> Result<f64, AppError> {
    Ok(Input::<f64>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPto(week.heading()).to_string())
        .default(0.0)
        .validate_with(|hours: &f64| -> Result<(), String> {
            if hours.is_finite() && *hours >= 0.0 {
                Ok(())
            } else {
                Err(Message::PromptPtoInvalid.to_string())
            }
        })
        .interact_text()?)
}
