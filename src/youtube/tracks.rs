use crate::error::ResolveError;
use crate::types::{
    Provider, ResourceType, SourceId, YoutubeDetails, YoutubeItemContentDetails, YoutubeItemId,
    YoutubeListResponse, YoutubePlaylistResource, YoutubeTrackRecord, YoutubeVideoResource,
};

use super::YoutubeApi;

/// Hard cap on playlist item pages. At the API maximum of 50 items per
/// page this covers 5 000 entries, the YouTube playlist size limit.
const MAX_PAGES: usize = 100;

impl YoutubeApi {
    /// Fetches name/channel/thumbnails for a playlist or video.
    pub async fn fetch_resource_details(
        &self,
        source: &SourceId,
    ) -> Result<YoutubeDetails, ResolveError> {
        match source.resource_type {
            ResourceType::Playlist => {
                let url = format!("{}/playlists", self.cfg.api_url);
                log::debug!("Fetching YouTube playlist details: {}", source.value);

                let response = self
                    .client
                    .get(&url)
                    .query(&[
                        ("part", "snippet,contentDetails"),
                        ("id", &source.value),
                        ("key", &self.cfg.api_key),
                    ])
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<YoutubeListResponse<YoutubePlaylistResource>>()
                    .await?;

                let playlist = response.items.into_iter().next().ok_or_else(|| {
                    ResolveError::NotFound {
                        provider: Provider::Youtube,
                        resource_type: ResourceType::Playlist,
                        value: source.value.clone(),
                    }
                })?;

                Ok(YoutubeDetails {
                    name: playlist.snippet.title.unwrap_or_default(),
                    channel_title: playlist.snippet.channel_title.unwrap_or_default(),
                    description: playlist.snippet.description,
                    thumbnails: playlist.snippet.thumbnails,
                    item_count: playlist
                        .content_details
                        .and_then(|details| details.item_count),
                })
            }
            ResourceType::Video => {
                let video = self.fetch_video(&source.value).await?;
                Ok(YoutubeDetails {
                    name: video.snippet.title.unwrap_or_default(),
                    channel_title: video.snippet.channel_title.unwrap_or_default(),
                    description: video.snippet.description,
                    thumbnails: video.snippet.thumbnails,
                    item_count: Some(1),
                })
            }
            other => Err(ResolveError::UnknownResourceType {
                provider: Provider::Youtube,
                resource_type: other,
                value: source.value.clone(),
            }),
        }
    }

    /// Fetches the item records for a playlist or video.
    ///
    /// A single video is synthesized into a one-element record list with
    /// the same shape playlist items have, so the enricher handles both
    /// without branching.
    pub async fn fetch_tracks(
        &self,
        source: &SourceId,
    ) -> Result<Vec<YoutubeTrackRecord>, ResolveError> {
        match source.resource_type {
            ResourceType::Playlist => self.fetch_playlist_items(&source.value).await,
            ResourceType::Video => {
                let video = self.fetch_video(&source.value).await?;
                Ok(vec![YoutubeTrackRecord {
                    id: Some(YoutubeItemId::Video {
                        video_id: video.id.clone(),
                    }),
                    snippet: Some(video.snippet),
                    content_details: Some(YoutubeItemContentDetails {
                        video_id: Some(video.id),
                    }),
                }])
            }
            other => Err(ResolveError::UnknownResourceType {
                provider: Provider::Youtube,
                resource_type: other,
                value: source.value.clone(),
            }),
        }
    }

    async fn fetch_video(&self, video_id: &str) -> Result<YoutubeVideoResource, ResolveError> {
        let url = format!("{}/videos", self.cfg.api_url);
        log::debug!("Fetching YouTube video: {video_id}");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("id", video_id),
                ("key", &self.cfg.api_key),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<YoutubeListResponse<YoutubeVideoResource>>()
            .await?;

        response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::NotFound {
                provider: Provider::Youtube,
                resource_type: ResourceType::Video,
                value: video_id.to_string(),
            })
    }

    /// Walks `nextPageToken` cursors at 50 items per page until the
    /// playlist is exhausted or the page cap trips.
    async fn fetch_playlist_items(
        &self,
        playlist_id: &str,
    ) -> Result<Vec<YoutubeTrackRecord>, ResolveError> {
        let url = format!("{}/playlistItems", self.cfg.api_url);
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            if pages >= MAX_PAGES {
                log::warn!("Playlist listing truncated after {MAX_PAGES} pages: {playlist_id}");
                break;
            }
            log::debug!(
                "Fetching YouTube playlist items page {} for {playlist_id}",
                pages + 1
            );

            let mut query = vec![
                ("part", "snippet,contentDetails".to_string()),
                ("playlistId", playlist_id.to_string()),
                ("maxResults", "50".to_string()),
                ("key", self.cfg.api_key.clone()),
            ];
            if let Some(token) = &page_token {
                query.push(("pageToken", token.clone()));
            }

            let page = self
                .client
                .get(&url)
                .query(&query)
                .send()
                .await?
                .error_for_status()?
                .json::<YoutubeListResponse<YoutubeTrackRecord>>()
                .await?;

            items.extend(page.items);
            pages += 1;

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(items)
    }
}
