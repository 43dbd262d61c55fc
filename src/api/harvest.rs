use super::TimeEntrySource;
use crate::libs::{config::ConfigModule, error::AppError, messages::Message, secret::Secret, week::TimeEntry};
use crate::{msg_debug, msg_print};
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client,
};
use serde::{Deserialize, Serialize};

pub const SECRET_FILE: &str = ".harvest_secret";
const QUERY_DATE_FORMAT: &str = "%Y%m%d";

/// Wire format of one element of the entries report.
#[derive(Deserialize, Debug)]
pub struct HarvestReportItem {
    pub day_entry: HarvestDayEntry,
}

#[derive(Deserialize, Debug)]
pub struct HarvestDayEntry {
    #[serde(default)]
    pub notes: Option<String>,
    pub hours: f64,
    pub project_id: i64,
    pub task_id: i64,
}

/// Decodes an entries report body, tagging every entry with `billable`.
///
/// Hours must be finite and non-negative.
pub fn decode_entries(body: &str, billable: bool) -> Result<Vec<TimeEntry>, AppError> {
    let report: Vec<HarvestReportItem> = serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))?;
    report
        .into_iter()
        .map(|item| {
            let entry = item.day_entry;
            if !entry.hours.is_finite() || entry.hours < 0.0 {
                return Err(AppError::Decode(format!("invalid hours {} in entry", entry.hours)));
            }
            Ok(TimeEntry {
                notes: entry.notes.unwrap_or_default(),
                hours: entry.hours,
                project_id: entry.project_id,
                task_id: entry.task_id,
                billable,
            })
        })
        .collect()
}

#[derive(Debug)]
pub struct Harvest {
    client: Client,
    config: HarvestConfig,
    password: String,
}

impl Harvest {
    /// Builds a client, taking the password from the configuration or from
    /// the encrypted secret store.
    pub fn new(config: &HarvestConfig) -> anyhow::Result<Self> {
        let password = match &config.password {
            Some(password) => password.clone(),
            None => Secret::new(SECRET_FILE, &Message::PromptHarvestPassword.to_string()).get_or_prompt()?,
        };
        Ok(Self::with_password(config, &password))
    }

    pub fn with_password(config: &HarvestConfig, password: &str) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            password: password.to_owned(),
        }
    }
}

impl TimeEntrySource for Harvest {
    async fn fetch_entries(&mut self, start: NaiveDate, end: NaiveDate, billable: bool) -> Result<Vec<TimeEntry>, AppError> {
        let url = self.config.entries_url(start, end, billable);
        msg_debug!(Message::FetchingEntries(start.to_string(), end.to_string(), billable));

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let res = self
            .client
            .get(&url)
            .headers(headers)
            .basic_auth(&self.config.username, Some(&self.password))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(AppError::HttpStatus {
                url,
                status: res.status().as_u16(),
            });
        }

        let body = res.text().await?;
        decode_entries(&body, billable)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HarvestConfig {
    pub subdomain: String,
    pub username: String,
    pub user_id: String,
    /// Kept in the encrypted secret store when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl HarvestConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "harvest".to_string(),
            name: "Harvest".to_string(),
        }
    }

    pub fn entries_url(&self, start: NaiveDate, end: NaiveDate, billable: bool) -> String {
        format!(
            "https://{}.harvestapp.com/people/{}/entries?from={}&to={}&billable={}",
            self.subdomain,
            self.user_id,
            start.format(QUERY_DATE_FORMAT),
            end.format(QUERY_DATE_FORMAT),
            if billable { "yes" } else { "no" }
        )
    }

    pub fn init(config: &Option<Self>) -> Result<Self, AppError> {
        let config = config.clone().unwrap_or(Self {
            subdomain: "".to_string(),
            username: "".to_string(),
            user_id: "".to_string(),
            password: None,
        });
        msg_print!(Message::ConfigModuleHarvest);
        Ok(Self {
            subdomain: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptHarvestSubdomain.to_string())
                .default(config.subdomain)
                .interact_text()?,
            username: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptHarvestUsername.to_string())
                .default(config.username)
                .interact_text()?,
            user_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptHarvestUserId.to_string())
                .default(config.user_id)
                .interact_text()?,
            password: config.password,
        })
    }
}
