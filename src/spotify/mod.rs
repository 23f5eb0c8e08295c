//! # Spotify Gateway Module
//!
//! Thin integration layer over the Spotify Web API for the operations the
//! resolution pipeline needs: a client-credentials token exchange, resource
//! details, paginated track listings, and a best-effort single-result track
//! search used by the cross-provider enricher.
//!
//! ## Architecture
//!
//! All state lives in an explicit [`SpotifyApi`] context (HTTP client +
//! [`SpotifyConfig`]) that callers construct once and thread through;
//! there are no process-wide singletons or cached module-level tokens.
//!
//! ```text
//! Resolver / Enricher
//!        ↓
//! SpotifyApi
//!     ├── auth    - client-credentials token exchange
//!     ├── tracks  - resource details + paginated track listings
//!     └── search  - limit-1 track search (best effort, never raises)
//!        ↓
//! Spotify Web API (reqwest, JSON)
//! ```
//!
//! ## Error Handling
//!
//! - `fetch_access_token` never raises: failures are logged and surface as
//!   an absent token. Callers decide whether that is fatal (resolver) or
//!   tolerable (enricher's best-effort search).
//! - `fetch_resource_details` / `fetch_tracks` propagate HTTP failures as
//!   [`crate::error::ResolveError::Http`]; no retry happens at this layer.
//! - `search_track` swallows every failure and returns `None` with a debug
//!   log so the enricher can fall back to heuristic parsing.
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - client-credentials token exchange
//! - `GET /v1/{playlists|albums|tracks}/{id}` - resource details
//! - `GET /v1/{playlists|albums}/{id}/tracks` - track pages via `next` links
//! - `GET /v1/search?type=track&limit=1` - enrichment lookups

pub mod auth;
pub mod search;
pub mod tracks;

use reqwest::Client;

/// Endpoint and credential configuration, built by [`crate::config`] (or
/// directly in tests). The gateway itself never reads the environment.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub api_url: String,
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Per-run Spotify API context: one HTTP client, one config.
pub struct SpotifyApi {
    pub(crate) client: Client,
    pub(crate) cfg: SpotifyConfig,
}

impl SpotifyApi {
    pub fn new(cfg: SpotifyConfig) -> Self {
        Self {
            client: Client::new(),
            cfg,
        }
    }
}
