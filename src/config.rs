//! Configuration management for the track export.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files and collects them into an explicit [`Config`] that is
//! passed to every component by parameter.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

/// Token endpoint used when `TOKEN_URL` is not set.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `.env` files.
///
/// The working directory `.env` is read first, then `trackcsv/.env` in the
/// platform-specific local data directory. Variables that are already set
/// are never overridden, so real environment variables always win. Both
/// files are optional.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/trackcsv/.env`
/// - macOS: `~/Library/Application Support/trackcsv/.env`
/// - Windows: `%LOCALAPPDATA%/trackcsv/.env`
///
/// # Errors
///
/// Returns an error string if one of the files exists but cannot be parsed.
pub fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(format!("Cannot parse .env: {}", e)),
    }

    let path = data_env_path();
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("Cannot parse {}: {}", path.display(), e))?;
    }

    Ok(())
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("trackcsv/.env");
    path
}

/// Settings needed to talk to the Spotify Web API.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Root of the search, artist and audio feature endpoints,
    /// e.g. `https://api.spotify.com/v1`.
    pub base_url: String,
    pub token_url: String,
}

impl Config {
    pub fn new(client_id: String, client_secret: String, base_url: String) -> Self {
        Self {
            client_id,
            client_secret,
            base_url: base_url.trim_end_matches('/').to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }

    pub fn with_token_url(mut self, token_url: String) -> Self {
        self.token_url = token_url;
        self
    }

    /// Builds the configuration from `CLIENT_ID`, `CLIENT_SECRET`, `BASE_URL`
    /// and the optional `TOKEN_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first required variable that is unset or
    /// empty.
    pub fn from_env() -> Result<Self, String> {
        let config = Self::new(
            required("CLIENT_ID")?,
            required("CLIENT_SECRET")?,
            required("BASE_URL")?,
        );

        Ok(match env::var("TOKEN_URL") {
            Ok(url) if !url.trim().is_empty() => config.with_token_url(url),
            _ => config,
        })
    }
}

fn required(key: &str) -> Result<String, String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", key)),
    }
}
