use crate::types::{SearchResponse, SpotifySearchHit};

use super::SpotifyApi;

impl SpotifyApi {
    /// Searches for the single best track match for a free-text query.
    ///
    /// Best effort by contract: an empty query, a missing token, any HTTP
    /// failure or an empty result set all come back as `None` with a debug
    /// log. The enricher falls back to heuristic title parsing in that
    /// case, so nothing here may abort the surrounding resolution.
    pub async fn search_track(&self, query: &str, token: &str) -> Option<SpotifySearchHit> {
        let query = query.trim();
        if query.is_empty() {
            log::debug!("Skipping Spotify search: empty query");
            return None;
        }
        if token.is_empty() {
            log::debug!("Skipping Spotify search: no access token");
            return None;
        }

        let url = format!("{}/search", self.cfg.api_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    log::debug!("Spotify search failed for '{query}': {err}");
                    return None;
                }
            },
            Err(err) => {
                log::debug!("Spotify search failed for '{query}': {err}");
                return None;
            }
        };

        let body = match response.json::<SearchResponse>().await {
            Ok(body) => body,
            Err(err) => {
                log::debug!("Malformed Spotify search response for '{query}': {err}");
                return None;
            }
        };

        let item = body.tracks?.items.into_iter().next()?;
        let artist = item
            .artists
            .iter()
            .map(|a| a.name.clone())
            .collect::<Vec<_>>()
            .join(", ");
        let title = item.name.unwrap_or_default();
        let images = item.album.map(|album| album.images).unwrap_or_default();

        Some(SpotifySearchHit {
            artist,
            title,
            images,
        })
    }
}
