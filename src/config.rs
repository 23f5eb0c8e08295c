//! Configuration management for playsync.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It is the only place that reads
//! the process environment: the resolution core receives config structs
//! built here and never touches env vars itself.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory

use dotenv;
use std::{env, path::PathBuf};

use crate::{spotify::SpotifyConfig, youtube::YoutubeConfig};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `playsync/.env`. Falls back to a `.env` in the
/// working directory when no file exists there, so development checkouts
/// work without installing anything.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/playsync/.env`
/// - macOS: `~/Library/Application Support/playsync/.env`
/// - Windows: `%LOCALAPPDATA%/playsync/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or the
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playsync/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    } else {
        // Development fallback: .env next to the binary's working directory.
        dotenv::dotenv().ok();
    }
    Ok(())
}

/// Returns the Spotify API client ID used for the client-credentials exchange.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_CLIENT_ID").expect("SPOTIFY_API_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret used for the client-credentials exchange.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_CLIENT_SECRET").expect("SPOTIFY_API_CLIENT_SECRET must be set")
}

/// Returns the Spotify token endpoint URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the YouTube Data API key.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_KEY` environment variable is not set.
pub fn youtube_api_key() -> String {
    env::var("YOUTUBE_API_KEY").expect("YOUTUBE_API_KEY must be set")
}

/// Returns the YouTube Data API base URL.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = youtube_apiurl(); // e.g., "https://www.googleapis.com/youtube/v3"
/// ```
pub fn youtube_apiurl() -> String {
    env::var("YOUTUBE_API_URL").expect("YOUTUBE_API_URL must be set")
}

/// Builds the Spotify gateway configuration from the environment.
pub fn spotify_config() -> SpotifyConfig {
    SpotifyConfig {
        api_url: spotify_apiurl(),
        token_url: spotify_apitoken_url(),
        client_id: spotify_client_id(),
        client_secret: spotify_client_secret(),
    }
}

/// Builds the YouTube gateway configuration from the environment.
pub fn youtube_config() -> YoutubeConfig {
    YoutubeConfig {
        api_url: youtube_apiurl(),
        api_key: youtube_api_key(),
    }
}
