use super::balance::Balance;
use super::formatter::format_hours;
use super::messages::Message;
use super::week::Week;
use crate::msg_print;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Prints the billable entries of a processed week and its totals.
    pub fn week(week: &Week, balance: &Balance) {
        msg_print!(Message::WeekHeader(week.heading()));

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.set_titles(row!["HOURS", "NOTES"]);
        for entry in week.billable_entries() {
            table.add_row(row![r->format_hours(entry.hours), entry.notes]);
        }
        table.printstd();

        msg_print!(Message::WeekSummary {
            billable: format_hours(week.billable_hours()),
            total: format_hours(balance.total),
            non_billable: format_hours(week.non_billable_hours()),
            pto: format_hours(week.pto),
            over_under: format_hours(balance.over_under),
        });
        println!();
    }
}
