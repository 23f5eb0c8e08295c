//! # YouTube Gateway Module
//!
//! Integration layer over the YouTube Data API v3 for resource details,
//! paginated playlist item listings, and a music-category video search.
//!
//! All requests authenticate with an API key passed as the `key` query
//! parameter; there is no token exchange. As with the Spotify gateway,
//! state lives in an explicit [`YoutubeApi`] context instead of globals.
//!
//! ## API Coverage
//!
//! - `GET /playlists?part=snippet,contentDetails` - playlist details
//! - `GET /videos?part=snippet` - video details / single-video listings
//! - `GET /playlistItems?part=snippet,contentDetails` - item pages
//! - `GET /search?type=video&videoCategoryId=10` - music video search

pub mod search;
pub mod tracks;

use reqwest::Client;

/// Endpoint and key configuration, built by [`crate::config`].
#[derive(Debug, Clone)]
pub struct YoutubeConfig {
    pub api_url: String,
    pub api_key: String,
}

/// Per-run YouTube API context.
pub struct YoutubeApi {
    pub(crate) client: Client,
    pub(crate) cfg: YoutubeConfig,
}

impl YoutubeApi {
    pub fn new(cfg: YoutubeConfig) -> Self {
        Self {
            client: Client::new(),
            cfg,
        }
    }
}
