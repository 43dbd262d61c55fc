//! Configuration for hourledger.
//!
//! The configuration is a JSON file, by default `config.json` in the
//! platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\hourledger\hourledger\config.json`
//! - **macOS**: `~/Library/Application Support/hourledger/hourledger/config.json`
//! - **Linux**: `~/.local/share/hourledger/hourledger/config.json`
//!
//! Every command can point at another file with `--config`.
//!
//! ```json
//! {
//!   "ledger_path": "/home/me/ledger.csv",
//!   "employee": "Jane Doe",
//!   "category": "Engineering",
//!   "harvest": {
//!     "subdomain": "acme",
//!     "username": "jane@acme.test",
//!     "user_id": "123456"
//!   }
//! }
//! ```
//!
//! The loaded [`Config`] is passed explicitly to whatever needs it; there is
//! no process-wide configuration.

use super::data_storage::DataStorage;
use super::error::AppError;
use super::messages::Message;
use crate::api::harvest::HarvestConfig;
use crate::msg_print;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_LEDGER_FILE_NAME: &str = "ledger.csv";

/// A group of settings offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Ledger file the weekly rows are appended to.
    pub ledger_path: PathBuf,

    /// Written to column 1 of every entry row.
    pub employee: String,

    /// Written to column 2 of every entry row.
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvest: Option<HarvestConfig>,
}

impl Default for Config {
    fn default() -> Self {
        let ledger_path = DataStorage::new()
            .get_path(DEFAULT_LEDGER_FILE_NAME)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LEDGER_FILE_NAME));
        Config {
            ledger_path,
            employee: String::new(),
            category: String::new(),
            harvest: None,
        }
    }
}

impl Config {
    /// Default location of the configuration file.
    pub fn default_path() -> Result<PathBuf, AppError> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    fn resolve_path(path: Option<&Path>) -> Result<PathBuf, AppError> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Loads the configuration; a missing or malformed file is fatal.
    pub fn read(path: Option<&Path>) -> Result<Config, AppError> {
        let path = Self::resolve_path(path)?;

        if !path.exists() {
            return Err(AppError::Config(Message::ConfigFileNotFound(path.display().to_string()).to_string()));
        }

        let config_str = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&config_str).map_err(|e| AppError::Config(Message::ConfigParseError(e.to_string()).to_string()))
    }

    /// Loads the configuration, or the defaults when no file exists yet.
    pub fn read_or_default(path: Option<&Path>) -> Result<Config, AppError> {
        let resolved = Self::resolve_path(path)?;
        if resolved.exists() {
            Self::read(Some(&resolved))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the configuration as pretty-printed JSON and returns its path.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf, AppError> {
        let path = Self::resolve_path(path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(&path)?;
        serde_json::to_writer_pretty(&config_file, &self).map_err(|e| AppError::Config(e.to_string()))?;
        Ok(path)
    }

    /// Harvest settings, required by every command that fetches entries.
    pub fn harvest(&self) -> Result<&HarvestConfig, AppError> {
        self.harvest
            .as_ref()
            .ok_or_else(|| AppError::Config(Message::ConfigHarvestMissing.to_string()))
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init(current: Config) -> Result<Self, AppError> {
        let mut config = current;

        let modules = vec![
            ConfigModule {
                key: "general".to_string(),
                name: "General".to_string(),
            },
            HarvestConfig::module(),
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .defaults(&[true, config.harvest.is_none()])
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "general" => {
                    msg_print!(Message::ConfigModuleGeneral);
                    let ledger_path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptLedgerPath.to_string())
                        .default(config.ledger_path.display().to_string())
                        .interact_text()?;
                    config.ledger_path = PathBuf::from(ledger_path);
                    config.employee = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptEmployee.to_string())
                        .default(config.employee.clone())
                        .interact_text()?;
                    config.category = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptCategory.to_string())
                        .default(config.category.clone())
                        .interact_text()?;
                }
                "harvest" => config.harvest = Some(HarvestConfig::init(&config.harvest)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
