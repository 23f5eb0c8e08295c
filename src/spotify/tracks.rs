use serde::de::DeserializeOwned;

use crate::error::ResolveError;
use crate::types::{
    Paging, Provider, ResourceType, SourceId, SpotifyDetails, SpotifyPlaylistItem,
    SpotifyTrackObject, SpotifyTrackRecord,
};

use super::SpotifyApi;

/// Hard cap on track pages fetched per resource. 100 pages covers 10 000
/// playlist entries, which is Spotify's own playlist size limit.
const MAX_PAGES: usize = 100;

impl SpotifyApi {
    /// Fetches name/artists/images for a playlist, album or track.
    pub async fn fetch_resource_details(
        &self,
        token: &str,
        source: &SourceId,
    ) -> Result<SpotifyDetails, ResolveError> {
        let url = format!(
            "{}/{}s/{}",
            self.cfg.api_url, source.resource_type, source.value
        );
        log::debug!("Fetching Spotify resource details: {url}");

        let details = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json::<SpotifyDetails>()
            .await?;

        Ok(details)
    }

    /// Fetches the track records for a source.
    ///
    /// Playlists and albums are paginated with Spotify `next` links; a
    /// single track is wrapped into a one-element list so downstream
    /// normalization sees a uniform shape.
    pub async fn fetch_tracks(
        &self,
        token: &str,
        source: &SourceId,
    ) -> Result<Vec<SpotifyTrackRecord>, ResolveError> {
        match source.resource_type {
            ResourceType::Playlist => {
                let url = format!("{}/playlists/{}/tracks", self.cfg.api_url, source.value);
                let items = self.fetch_paged::<SpotifyPlaylistItem>(token, url).await?;
                Ok(items
                    .into_iter()
                    .map(SpotifyTrackRecord::PlaylistItem)
                    .collect())
            }
            ResourceType::Album => {
                let url = format!("{}/albums/{}/tracks", self.cfg.api_url, source.value);
                let items = self.fetch_paged::<SpotifyTrackObject>(token, url).await?;
                Ok(items.into_iter().map(SpotifyTrackRecord::Item).collect())
            }
            ResourceType::Track => {
                let url = format!("{}/tracks/{}", self.cfg.api_url, source.value);
                log::debug!("Fetching single Spotify track: {url}");
                let track = self
                    .client
                    .get(&url)
                    .bearer_auth(token)
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<SpotifyTrackObject>()
                    .await?;
                Ok(vec![SpotifyTrackRecord::Item(track)])
            }
            other => Err(ResolveError::UnknownResourceType {
                provider: Provider::Spotify,
                resource_type: other,
                value: source.value.clone(),
            }),
        }
    }

    /// Walks Spotify `next` links iteratively until the listing is
    /// exhausted or the page cap trips.
    async fn fetch_paged<T: DeserializeOwned>(
        &self,
        token: &str,
        first_url: String,
    ) -> Result<Vec<T>, ResolveError> {
        let mut items = Vec::new();
        let mut next_url = Some(first_url);
        let mut pages = 0usize;

        while let Some(url) = next_url {
            if pages >= MAX_PAGES {
                log::warn!("Track listing truncated after {MAX_PAGES} pages: {url}");
                break;
            }
            log::debug!("Fetching Spotify track page {}: {url}", pages + 1);

            let page = self
                .client
                .get(&url)
                .bearer_auth(token)
                .send()
                .await?
                .error_for_status()?
                .json::<Paging<T>>()
                .await?;

            items.extend(page.items);
            next_url = page.next;
            pages += 1;
        }

        Ok(items)
    }
}
