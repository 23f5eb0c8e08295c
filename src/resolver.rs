//! End-to-end resolution: URL in, canonical [`Playlist`] out.
//!
//! The resolver owns both provider gateways and the optional disk caches,
//! and threads them explicitly through classification, fetching,
//! normalization and enrichment. Folder naming policy lives here too.

use crate::enrich::Enricher;
use crate::error::ResolveError;
use crate::management::{ResourceCacheManager, SearchCacheManager};
use crate::normalize;
use crate::source;
use crate::spotify::{SpotifyApi, SpotifyConfig};
use crate::types::{
    Playlist, Provider, ResourceType, SourceId, SpotifyDetails, SpotifyTrackRecord, Track,
    YoutubeDetails, YoutubeThumbnails, YoutubeTrackRecord,
};
use crate::youtube::{YoutubeApi, YoutubeConfig};

pub struct Resolver {
    spotify: SpotifyApi,
    youtube: YoutubeApi,
    resource_cache: Option<ResourceCacheManager>,
    search_cache: Option<SearchCacheManager>,
}

impl Resolver {
    pub fn new(spotify_cfg: SpotifyConfig, youtube_cfg: YoutubeConfig, use_cache: bool) -> Self {
        Self::with_managers(
            spotify_cfg,
            youtube_cfg,
            use_cache.then(ResourceCacheManager::new),
            use_cache.then(SearchCacheManager::new),
        )
    }

    /// Builds a resolver over explicit cache managers, so callers can place
    /// the caches somewhere other than the default data directory.
    pub fn with_managers(
        spotify_cfg: SpotifyConfig,
        youtube_cfg: YoutubeConfig,
        resource_cache: Option<ResourceCacheManager>,
        search_cache: Option<SearchCacheManager>,
    ) -> Self {
        Self {
            spotify: SpotifyApi::new(spotify_cfg),
            youtube: YoutubeApi::new(youtube_cfg),
            resource_cache,
            search_cache,
        }
    }

    /// Resolves a source URL to a playlist with fully normalized tracks.
    pub async fn resolve(&self, url: &str) -> Result<Playlist, ResolveError> {
        let source = match source::classify(url)? {
            Some(source) => source,
            None => {
                return Err(ResolveError::UnknownResourceType {
                    provider: Provider::Youtube,
                    resource_type: ResourceType::Channel,
                    value: url.to_string(),
                });
            }
        };
        log::debug!(
            "Resolved {url} to {} {} '{}'",
            source.provider,
            source.resource_type,
            source.value
        );

        match source.provider {
            Provider::Spotify => self.resolve_spotify(&source).await,
            Provider::Youtube => self.resolve_youtube(&source).await,
        }
    }

    async fn resolve_spotify(&self, source: &SourceId) -> Result<Playlist, ResolveError> {
        let token = self
            .spotify
            .fetch_access_token()
            .await
            .ok_or(ResolveError::AuthFailed)?;

        let details: SpotifyDetails = match self.cached(source, None).await {
            Some(details) => details,
            None => {
                let details = self.spotify.fetch_resource_details(&token, source).await?;
                self.store(source, None, &details).await;
                details
            }
        };

        let records: Vec<SpotifyTrackRecord> = match self.cached(source, Some("tracks")).await {
            Some(records) => records,
            None => {
                let records = self.spotify.fetch_tracks(&token, source).await?;
                self.store(source, Some("tracks"), &records).await;
                records
            }
        };

        let total = records.len();
        let mut tracks = Vec::with_capacity(total);
        for (index, record) in records.into_iter().enumerate() {
            tracks.push(normalize::spotify_track(
                record,
                index,
                total,
                source.resource_type,
            )?);
        }

        Ok(Playlist {
            folder_name: spotify_folder_name(source.resource_type, &details)?,
            name: details.name,
            tracks,
            images: details.images.into_iter().map(|image| image.url).collect(),
        })
    }

    async fn resolve_youtube(&self, source: &SourceId) -> Result<Playlist, ResolveError> {
        if !matches!(
            source.resource_type,
            ResourceType::Playlist | ResourceType::Video
        ) {
            return Err(ResolveError::UnknownResourceType {
                provider: Provider::Youtube,
                resource_type: source.resource_type,
                value: source.value.clone(),
            });
        }

        let details: YoutubeDetails = match self.cached(source, None).await {
            Some(details) => details,
            None => {
                let details = self.youtube.fetch_resource_details(source).await?;
                self.store(source, None, &details).await;
                details
            }
        };

        let records: Vec<YoutubeTrackRecord> = match self.cached(source, Some("tracks")).await {
            Some(records) => records,
            None => {
                let records = self.youtube.fetch_tracks(source).await?;
                self.store(source, Some("tracks"), &records).await;
                records
            }
        };

        let enricher = Enricher::new(&self.spotify, self.search_cache.as_ref());
        let mut tracks: Vec<Track> = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            tracks.push(enricher.enrich(record, index).await?);
        }

        Ok(Playlist {
            folder_name: youtube_folder_name(source.resource_type, &details)?,
            name: details.name,
            tracks,
            images: artwork_urls(details.thumbnails.as_ref()),
        })
    }

    async fn cached<T: serde::de::DeserializeOwned>(
        &self,
        source: &SourceId,
        suffix: Option<&str>,
    ) -> Option<T> {
        self.resource_cache.as_ref()?.get(source, suffix).await
    }

    async fn store<T: serde::Serialize>(&self, source: &SourceId, suffix: Option<&str>, value: &T) {
        if let Some(cache) = &self.resource_cache {
            if let Err(err) = cache.put(source, suffix, value).await {
                log::debug!(
                    "Failed to cache {} {} '{}': {err:?}",
                    source.provider,
                    source.resource_type,
                    source.value
                );
            }
        }
    }
}

/// Folder policy for Spotify sources: a playlist keeps its name, an album
/// is filed under artist(s), loose tracks land in `Misc`.
pub fn spotify_folder_name(
    resource_type: ResourceType,
    details: &SpotifyDetails,
) -> Result<String, ResolveError> {
    let name = match resource_type {
        ResourceType::Playlist => normalize::sanitize_name(&details.name),
        ResourceType::Album => {
            let artists = details
                .artists
                .iter()
                .map(|a| a.name.clone())
                .collect::<Vec<_>>()
                .join(", ");
            normalize::sanitize_name(&format!("{artists} - {}", details.name))
        }
        ResourceType::Track => "Misc".to_string(),
        other => {
            return Err(ResolveError::UnknownResourceType {
                provider: Provider::Spotify,
                resource_type: other,
                value: details.name.clone(),
            });
        }
    };
    Ok(name)
}

/// Folder policy for YouTube sources: a playlist keeps its name, a single
/// video is filed under its channel.
pub fn youtube_folder_name(
    resource_type: ResourceType,
    details: &YoutubeDetails,
) -> Result<String, ResolveError> {
    let name = match resource_type {
        ResourceType::Playlist => normalize::sanitize_name(&details.name),
        ResourceType::Video => {
            normalize::sanitize_name(&format!("{} - {}", details.channel_title, details.name))
        }
        other => {
            return Err(ResolveError::UnknownResourceType {
                provider: Provider::Youtube,
                resource_type: other,
                value: details.name.clone(),
            });
        }
    };
    Ok(name)
}

/// Artwork candidates best quality first.
pub fn artwork_urls(thumbnails: Option<&YoutubeThumbnails>) -> Vec<String> {
    let Some(thumbnails) = thumbnails else {
        return Vec::new();
    };
    [
        &thumbnails.maxres,
        &thumbnails.high,
        &thumbnails.standard,
        &thumbnails.medium,
        &thumbnails.default,
    ]
    .into_iter()
    .flatten()
    .map(|thumb| thumb.url.clone())
    .collect()
}
