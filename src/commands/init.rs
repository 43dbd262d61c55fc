//! Interactive configuration setup.

use crate::{
    api::harvest::SECRET_FILE,
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::{fs, path::Path};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the configuration file and the stored Harvest password
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs, config_path: Option<&Path>) -> Result<()> {
    if init_args.delete {
        let config_file = match config_path {
            Some(path) => path.to_path_buf(),
            None => Config::default_path()?,
        };
        let secret_file = DataStorage::new().get_path(SECRET_FILE)?;
        for file in [config_file, secret_file] {
            if file.exists() {
                fs::remove_file(&file)?;
            }
        }
        return Ok(());
    }

    let current = Config::read_or_default(config_path)?;
    let saved_to = Config::init(current)?.save(config_path)?;

    msg_success!(Message::ConfigSaved);
    msg_print!(Message::ConfigSavedTo(saved_to.display().to_string()));
    Ok(())
}
