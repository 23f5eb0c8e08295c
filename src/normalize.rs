//! Turns raw provider track records into canonical [`Track`] values.
//!
//! All functions here are pure and synchronous. Spotify records carry
//! complete metadata, so normalization is a straight mapping plus ordinal
//! prefixing; YouTube records only carry a video title, so this module
//! extracts the parts and leaves artist/title resolution to the enricher.

use crate::error::ResolveError;
use crate::types::{
    Provider, ResourceType, SpotifyTrackObject, SpotifyTrackRecord, TagSource, Track, TrackAlbum,
    YoutubeItemId, YoutubeTrackRecord,
};

/// Zero-padded ordinal prefix for position `index` out of `total` entries.
/// Width follows the digit count of `total` so names sort lexicographically.
pub fn ordinal_string(index: usize, total: usize) -> String {
    let width = total.to_string().len();
    format!("{index:0width$}")
}

/// Replaces `/` so the result is always usable as a single path component.
pub fn sanitize_name(name: &str) -> String {
    name.replace('/', "|")
}

fn unwrap_spotify(
    record: SpotifyTrackRecord,
    index: usize,
) -> Result<SpotifyTrackObject, ResolveError> {
    match record {
        SpotifyTrackRecord::PlaylistItem(item) => {
            item.track.ok_or_else(|| ResolveError::MalformedRecord {
                provider: Provider::Spotify,
                index,
                reason: "playlist item has no track".to_string(),
            })
        }
        SpotifyTrackRecord::Item(track) => Ok(track),
    }
}

/// Normalizes one Spotify record at position `index` of `total`.
///
/// Ordinal prefixes apply only to ordered resources (playlists and albums);
/// a single track gets a bare title. The wrapper/bare record distinction is
/// erased here and never reaches callers.
pub fn spotify_track(
    record: SpotifyTrackRecord,
    index: usize,
    total: usize,
    resource_type: ResourceType,
) -> Result<Track, ResolveError> {
    let track = unwrap_spotify(record, index)?;

    let name = match track.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => {
            return Err(ResolveError::MalformedRecord {
                provider: Provider::Spotify,
                index,
                reason: "track has no name".to_string(),
            });
        }
    };

    let artists: Vec<String> = track.artists.into_iter().map(|a| a.name).collect();
    let ordered = matches!(resource_type, ResourceType::Playlist | ResourceType::Album);

    let base = if artists.is_empty() {
        name.clone()
    } else {
        format!("{} - {}", artists.join(", "), name)
    };
    let full_title = if ordered {
        sanitize_name(&format!("{}. {}", ordinal_string(index, total), base))
    } else {
        sanitize_name(&base)
    };

    Ok(Track {
        id: track.id.unwrap_or_default(),
        name,
        artists,
        ordinal: ordered.then(|| (index + 1) as u32),
        full_title,
        album: track.album.map(|album| TrackAlbum {
            name: album.name,
            images: album.images.into_iter().map(|image| image.url).collect(),
        }),
        video_id: None,
        tag_source: TagSource::Spotify,
    })
}

/// Raw parts of a YouTube record the enricher works from.
#[derive(Debug, Clone)]
pub struct YoutubeParts {
    pub video_id: String,
    pub raw_title: String,
    pub channel_title: String,
}

/// Extracts video id and titles from one YouTube record.
///
/// The video id lives in `contentDetails.videoId` for playlist items and in
/// `id.videoId` for search results; both forms are accepted. A record with
/// neither, or without a title, is malformed.
pub fn youtube_parts(
    record: YoutubeTrackRecord,
    index: usize,
) -> Result<YoutubeParts, ResolveError> {
    let snippet = record.snippet.unwrap_or_default();

    let raw_title = match snippet.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => {
            return Err(ResolveError::MalformedRecord {
                provider: Provider::Youtube,
                index,
                reason: "item has no title".to_string(),
            });
        }
    };

    let video_id = record
        .content_details
        .and_then(|details| details.video_id)
        .or(match record.id {
            Some(YoutubeItemId::Video { video_id }) => Some(video_id),
            _ => None,
        })
        .ok_or_else(|| ResolveError::MalformedRecord {
            provider: Provider::Youtube,
            index,
            reason: "item has no video id".to_string(),
        })?;

    Ok(YoutubeParts {
        video_id,
        raw_title,
        channel_title: snippet.channel_title.unwrap_or_default(),
    })
}

/// Normalizes one YouTube record without enrichment: the channel stands in
/// for the artist and the raw video title for the track name.
pub fn youtube_track(record: YoutubeTrackRecord, index: usize) -> Result<Track, ResolveError> {
    let parts = youtube_parts(record, index)?;

    let full_title = if parts.channel_title.is_empty() {
        sanitize_name(&parts.raw_title)
    } else {
        sanitize_name(&format!("{} - {}", parts.channel_title, parts.raw_title))
    };

    Ok(Track {
        id: parts.video_id.clone(),
        name: parts.raw_title,
        artists: if parts.channel_title.is_empty() {
            Vec::new()
        } else {
            vec![parts.channel_title]
        },
        ordinal: None,
        full_title,
        album: None,
        video_id: Some(parts.video_id),
        tag_source: TagSource::Youtube,
    })
}
