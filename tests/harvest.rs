#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hourledger::api::harvest::decode_entries;
    use hourledger::api::{Harvest, HarvestConfig, TimeEntrySource};
    use hourledger::libs::error::AppError;

    fn config() -> HarvestConfig {
        HarvestConfig {
            subdomain: "acme".to_string(),
            username: "jane@acme.test".to_string(),
            user_id: "4242".to_string(),
            password: None,
        }
    }

    #[test]
    fn test_entries_url() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(
            config().entries_url(start, end, true),
            "https://acme.harvestapp.com/people/4242/entries?from=20240304&to=20240310&billable=yes"
        );
        assert!(config().entries_url(start, end, false).ends_with("&billable=no"));
    }

    #[test]
    fn test_decode_entries() {
        let body = r#"[
            {"day_entry": {"id": 1, "notes": "Feature work", "hours": 6.5, "project_id": 11, "task_id": 22, "spent_at": "2024-03-04"}},
            {"day_entry": {"notes": null, "hours": 1.25, "project_id": 11, "task_id": 23}},
            {"day_entry": {"hours": 0.75, "project_id": 12, "task_id": 24}}
        ]"#;

        let entries = decode_entries(body, false).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].notes, "Feature work");
        assert_eq!(entries[0].hours, 6.5);
        assert_eq!(entries[0].project_id, 11);
        assert_eq!(entries[0].task_id, 22);
        assert_eq!(entries[1].notes, "");
        assert_eq!(entries[2].notes, "");
        assert!(entries.iter().all(|entry| !entry.billable));
    }

    #[test]
    fn test_decode_empty_report() {
        assert!(decode_entries("[]", true).unwrap().is_empty());
    }

    #[test]
    fn test_decode_malformed_body_is_an_error() {
        for body in [
            "",
            "<html>Unauthorized</html>",
            r#"{"error": "nope"}"#,
            r#"[{"day_entry": {"notes": "x"}}]"#,
            r#"[{"day_entry": {"notes": "x", "hours": -1.5, "project_id": 1, "task_id": 2}}]"#,
        ] {
            assert!(matches!(decode_entries(body, true), Err(AppError::Decode(_))), "body: {}", body);
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_network_error() {
        let mut harvest = Harvest::with_password(
            &HarvestConfig {
                subdomain: "invalid host name".to_string(),
                ..config()
            },
            "secret",
        );
        let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let result = harvest.fetch_entries(day, day, true).await;
        assert!(matches!(result, Err(AppError::Network(_))));
    }
}
