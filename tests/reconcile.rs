#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hourledger::api::TimeEntrySource;
    use hourledger::libs::config::Config;
    use hourledger::libs::error::AppError;
    use hourledger::libs::ledger::{CsvLedger, Ledger, Sheet, COL_NON_BILLABLE, COL_OVER_UNDER, COL_PTO};
    use hourledger::libs::reconcile::Reconciler;
    use hourledger::libs::week::{partition, TimeEntry, Week};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(hours: f64, notes: &str, billable: bool) -> TimeEntry {
        TimeEntry {
            notes: notes.to_string(),
            hours,
            project_id: 1,
            task_id: 1,
            billable,
        }
    }

    fn config() -> Config {
        Config {
            ledger_path: PathBuf::from("unused.csv"),
            employee: "Jane".to_string(),
            category: "Dev".to_string(),
            harvest: None,
        }
    }

    /// Canned entries keyed by week start and category; records every query.
    #[derive(Default)]
    struct FakeSource {
        entries: HashMap<(NaiveDate, bool), Vec<TimeEntry>>,
        calls: Vec<(NaiveDate, NaiveDate, bool)>,
        fail_on: Option<NaiveDate>,
    }

    impl TimeEntrySource for FakeSource {
        async fn fetch_entries(&mut self, start: NaiveDate, end: NaiveDate, billable: bool) -> Result<Vec<TimeEntry>, AppError> {
            self.calls.push((start, end, billable));
            if self.fail_on == Some(start) {
                return Err(AppError::Decode("bad body".to_string()));
            }
            Ok(self.entries.get(&(start, billable)).cloned().unwrap_or_default())
        }
    }

    /// Ledger held in memory that counts fetches and commits.
    #[derive(Default)]
    struct MemoryLedger {
        sheet: Sheet,
        fetches: usize,
        syncs: usize,
    }

    impl Ledger for MemoryLedger {
        fn fetch(&mut self) -> Result<Sheet, AppError> {
            self.fetches += 1;
            Ok(self.sheet.clone())
        }

        fn synchronize(&mut self, sheet: &Sheet) -> Result<(), AppError> {
            self.syncs += 1;
            self.sheet = sheet.clone();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_single_week_from_empty_ledger() {
        let config = config();
        let mut source = FakeSource::default();
        source
            .entries
            .insert((date(2024, 3, 4), true), vec![entry(6.0, "Feature", true), entry(4.0, "Review", true)]);
        source.entries.insert((date(2024, 3, 4), false), vec![entry(5.0, "Meetings", false)]);

        let mut reconciler = Reconciler::new(&config, source, MemoryLedger::default());
        let mut week = Week::new(date(2024, 3, 4));
        let balance = reconciler.process_week(&mut week, |_| Ok(2.0)).await.unwrap();

        assert_eq!(week.pto, 2.0);
        assert_eq!(week.billable_hours(), 10.0);
        assert_eq!(week.non_billable_hours(), 5.0);
        assert_eq!(balance.previous, 0.0);
        assert_eq!(balance.total, 17.0);
        assert_eq!(balance.over_under, -20.5);

        let ledger = reconciler.ledger();
        assert_eq!(ledger.fetches, 1);
        assert_eq!(ledger.syncs, 1);
        assert_eq!(ledger.sheet.rows().len(), 2);
        assert_eq!(ledger.sheet.cell(0, 4), Some("Feature"));
        assert_eq!(ledger.sheet.cell(1, COL_OVER_UNDER), Some("-20.50"));
        assert_eq!(ledger.sheet.cell(1, COL_PTO), Some("2.00"));
        assert_eq!(ledger.sheet.cell(1, COL_NON_BILLABLE), Some("5.00"));
    }

    #[tokio::test]
    async fn test_balance_is_reread_from_ledger_each_week() {
        let config = config();
        let weeks_start = date(2024, 3, 4);
        let mut source = FakeSource::default();
        source.entries.insert((weeks_start, true), vec![entry(40.0, "Sprint", true)]);
        source.entries.insert((date(2024, 3, 11), true), vec![entry(35.0, "Sprint", true)]);

        let mut ledger = MemoryLedger::default();
        ledger.sheet.update(0, COL_OVER_UNDER, "1.00");

        let mut reconciler = Reconciler::new(&config, source, ledger);
        let mut weeks = partition(weeks_start, date(2024, 3, 17));
        assert_eq!(weeks.len(), 2);

        let first = reconciler.process_week(&mut weeks[0], |_| Ok(0.0)).await.unwrap();
        assert_eq!(first.previous, 1.0);
        assert_eq!(first.over_under, 3.5);

        let second = reconciler.process_week(&mut weeks[1], |_| Ok(0.0)).await.unwrap();
        assert_eq!(second.previous, 3.5);
        assert_eq!(second.over_under, 1.0);

        assert_eq!(reconciler.ledger().fetches, 2);
        assert_eq!(reconciler.ledger().sheet.previous_balance(), 1.0);
    }

    #[tokio::test]
    async fn test_queries_cover_the_whole_week_in_order() {
        let config = config();
        let mut reconciler = Reconciler::new(&config, FakeSource::default(), MemoryLedger::default());
        let mut week = Week::new(date(2024, 3, 4));
        reconciler.process_week(&mut week, |_| Ok(0.0)).await.unwrap();

        assert_eq!(
            reconciler.source().calls,
            vec![(date(2024, 3, 4), date(2024, 3, 10), true), (date(2024, 3, 4), date(2024, 3, 10), false)]
        );

        // No billable entries: summary goes on a row of its own
        assert_eq!(reconciler.ledger().sheet.cell(0, 0), Some("3/4/2024"));
        assert_eq!(reconciler.ledger().sheet.cell(0, COL_OVER_UNDER), Some("-37.50"));
    }

    #[tokio::test]
    async fn test_pto_is_asked_with_the_week() {
        let config = config();
        let mut reconciler = Reconciler::new(&config, FakeSource::default(), MemoryLedger::default());
        let mut week = Week::new(date(2024, 3, 11));
        let balance = reconciler
            .process_week(&mut week, |w| {
                assert_eq!(w.start, date(2024, 3, 11));
                Ok(37.5)
            })
            .await
            .unwrap();
        assert_eq!(balance.over_under, 0.0);
    }

    #[tokio::test]
    async fn test_failure_aborts_without_writing_the_week() {
        let config = config();
        let source = FakeSource {
            fail_on: Some(date(2024, 3, 11)),
            ..FakeSource::default()
        };
        let mut reconciler = Reconciler::new(&config, source, MemoryLedger::default());
        let mut weeks = partition(date(2024, 3, 4), date(2024, 3, 17));

        reconciler.process_week(&mut weeks[0], |_| Ok(0.0)).await.unwrap();
        let result = reconciler.process_week(&mut weeks[1], |_| Ok(0.0)).await;

        assert!(matches!(result, Err(AppError::Decode(_))));
        // The first week stays committed
        assert_eq!(reconciler.ledger().syncs, 1);
        assert_eq!(reconciler.ledger().sheet.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_pto_prompt_failure_stops_before_fetching() {
        let config = config();
        let mut reconciler = Reconciler::new(&config, FakeSource::default(), MemoryLedger::default());
        let mut week = Week::new(date(2024, 3, 4));
        let result = reconciler
            .process_week(&mut week, |_| Err(AppError::Config("no terminal".to_string())))
            .await;
        assert!(result.is_err());
        assert!(reconciler.source().calls.is_empty());
        assert_eq!(reconciler.ledger().syncs, 0);
    }

    #[tokio::test]
    async fn test_csv_ledger_resumes_from_last_committed_row() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        let config = config();

        let mut source = FakeSource::default();
        source.entries.insert((date(2024, 3, 4), true), vec![entry(45.0, "Release", true)]);
        let mut reconciler = Reconciler::new(&config, source, CsvLedger::new(&path));
        let mut week = Week::new(date(2024, 3, 4));
        reconciler.process_week(&mut week, |_| Ok(0.0)).await.unwrap();

        // A later run with a fresh reconciler picks the balance up from the file
        let mut reconciler = Reconciler::new(&config, FakeSource::default(), CsvLedger::new(&path));
        let mut week = Week::new(date(2024, 3, 11));
        let balance = reconciler.process_week(&mut week, |_| Ok(37.5)).await.unwrap();
        assert_eq!(balance.previous, 7.5);
        assert_eq!(balance.over_under, 7.5);
    }
}
