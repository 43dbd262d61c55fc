//! Encrypted storage for service passwords.
//!
//! Passwords that are not written into the configuration file are prompted
//! for once, then kept AES-256-CBC encrypted and base64 encoded in the data
//! directory. The key and IV are embedded at build time by `build.rs`.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::{Context, Result};
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_name: &str, prompt: &str) -> Self {
        let secret_file_path = DataStorage::new().get_path(secret_name).unwrap_or_else(|_| PathBuf::from(secret_name));
        Self::with_path(secret_file_path, prompt)
    }

    pub fn with_path(secret_file_path: impl AsRef<Path>, prompt: &str) -> Self {
        Self {
            prompt: prompt.to_owned(),
            secret_file_path: secret_file_path.as_ref().to_path_buf(),
            key: APP_METADATA_ENCRYPTION_KEY.to_vec(),
            iv: APP_METADATA_ENCRYPTION_IV.to_vec(),
        }
    }

    /// Returns the stored password, prompting when none can be decrypted.
    pub fn get_or_prompt(&self) -> Result<String> {
        if fs::metadata(&self.secret_file_path).is_ok() {
            if let Ok(password) = self.decrypt() {
                return Ok(password);
            }
        }
        self.prompt()
    }

    pub fn prompt(&self) -> Result<String> {
        let password = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.store(&password)?;
        Ok(password)
    }

    /// Encrypts `password` into the secret file, replacing any previous value.
    pub fn store(&self, password: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv).context("invalid secret key")?;
        let ciphertext = cipher.encrypt_vec(password.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.secret_file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&self.secret_file_path)?;
        file.write_all(encoded.as_bytes())?;
        Ok(())
    }

    pub fn decrypt(&self) -> Result<String> {
        let mut file = File::open(&self.secret_file_path)?;
        let mut encoded = String::new();
        file.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv).context("invalid secret key")?;
        let decrypted = cipher.decrypt_vec(&ciphertext).context("secret file is corrupted")?;
        Ok(String::from_utf8(decrypted)?)
    }
}
