#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use hourledger::libs::week::{aggregate, partition, HoursAggregator, TimeEntry, Week};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(hours: f64, notes: &str) -> TimeEntry {
        TimeEntry {
            notes: notes.to_string(),
            hours,
            project_id: 1,
            task_id: 2,
            billable: true,
        }
    }

    #[test]
    fn test_single_week_range() {
        let weeks = partition(date(2024, 3, 4), date(2024, 3, 10));
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].start, date(2024, 3, 4));
        assert_eq!(weeks[0].end, date(2024, 3, 10));
        assert_eq!(weeks[0].label, "3/4/2024");
    }

    #[test]
    fn test_multi_week_range_is_ordered_and_contiguous() {
        let weeks = partition(date(2024, 1, 29), date(2024, 3, 3));
        assert_eq!(weeks.len(), 5);
        for week in &weeks {
            assert_eq!(week.start.weekday(), Weekday::Mon);
            assert_eq!(week.end.weekday(), Weekday::Sun);
        }
        for pair in weeks.windows(2) {
            assert_eq!(pair[1].start, pair[0].end + Duration::days(1));
        }
        assert_eq!(weeks[1].label, "2/5/2024");
    }

    #[test]
    fn test_zero_length_range_is_empty() {
        let day = date(2024, 3, 4);
        assert!(partition(day, day).is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert!(partition(date(2024, 3, 11), date(2024, 3, 10)).is_empty());
    }

    #[test]
    fn test_week_starting_on_end_is_excluded() {
        // The walk stops on the end date itself, so the Monday 3/11 week is not emitted
        let weeks = partition(date(2024, 3, 4), date(2024, 3, 11));
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].start, date(2024, 3, 4));
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        assert_eq!(aggregate(&[]), 0.0);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let entries = vec![entry(1.25, "a"), entry(7.5, "b"), entry(0.25, "c")];
        let mut reversed = entries.clone();
        reversed.reverse();
        assert_eq!(aggregate(&entries), 9.0);
        assert_eq!(aggregate(&reversed), 9.0);
        assert_eq!(entries.total_hours(), 9.0);
    }

    #[test]
    fn test_set_entries_recomputes_totals() {
        let mut week = Week::new(date(2024, 3, 4));
        assert_eq!(week.billable_hours(), 0.0);

        week.set_entries(vec![entry(8.0, "a"), entry(4.5, "b")], vec![entry(2.0, "c")]);
        assert_eq!(week.billable_hours(), 12.5);
        assert_eq!(week.non_billable_hours(), 2.0);
        assert_eq!(week.billable_entries().len(), 2);
        assert_eq!(week.non_billable_entries().len(), 1);

        week.set_entries(Vec::new(), Vec::new());
        assert_eq!(week.billable_hours(), 0.0);
        assert_eq!(week.non_billable_hours(), 0.0);
    }

    #[test]
    fn test_week_heading() {
        assert_eq!(Week::new(date(2024, 3, 4)).heading(), "Mar  4 2024");
        assert_eq!(Week::new(date(2024, 11, 18)).heading(), "Nov 18 2024");
    }
}
