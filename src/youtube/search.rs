use crate::error::ResolveError;
use crate::types::{VideoHit, YoutubeItemId, YoutubeListResponse, YoutubeTrackRecord};

use super::YoutubeApi;

impl YoutubeApi {
    /// Searches the music category for the single best video match.
    ///
    /// Unlike the read endpoints, search burns 100 quota units per call, so
    /// failures here almost always mean the daily quota is exhausted. Every
    /// failure is reported as [`ResolveError::QuotaExceeded`] with the
    /// underlying reason; an empty result set is `Ok(None)`.
    pub async fn search_video(&self, query: &str) -> Result<Option<VideoHit>, ResolveError> {
        let url = format!("{}/search", self.cfg.api_url);
        log::debug!("Searching YouTube for '{query}'");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("videoCategoryId", "10"),
                ("maxResults", "1"),
                ("q", query),
                ("key", &self.cfg.api_key),
            ])
            .send()
            .await
            .map_err(|err| ResolveError::QuotaExceeded {
                reason: err.to_string(),
            })?;

        let response = response
            .error_for_status()
            .map_err(|err| ResolveError::QuotaExceeded {
                reason: err.to_string(),
            })?;

        let body = response
            .json::<YoutubeListResponse<YoutubeTrackRecord>>()
            .await
            .map_err(|err| ResolveError::QuotaExceeded {
                reason: err.to_string(),
            })?;

        let Some(item) = body.items.into_iter().next() else {
            return Ok(None);
        };

        let video_id = match item.id {
            Some(YoutubeItemId::Video { video_id }) => video_id,
            _ => return Ok(None),
        };
        let snippet = item.snippet.unwrap_or_default();

        Ok(Some(VideoHit {
            video_id,
            title: snippet.title.unwrap_or_default(),
            channel_title: snippet.channel_title.unwrap_or_default(),
        }))
    }
}
