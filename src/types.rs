use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

// --- canonical model ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Spotify,
    Youtube,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Spotify => write!(f, "spotify"),
            Provider::Youtube => write!(f, "youtube"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Playlist,
    Album,
    Track,
    Video,
    Channel,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::Playlist => "playlist",
            ResourceType::Album => "album",
            ResourceType::Track => "track",
            ResourceType::Video => "video",
            ResourceType::Channel => "channel",
        };
        write!(f, "{name}")
    }
}

/// Typed identity of a source URL, derived once per run by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceId {
    pub provider: Provider,
    pub resource_type: ResourceType,
    pub value: String,
}

/// Which provider's metadata populated a track's artist/title fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSource {
    Spotify,
    Youtube,
}

impl fmt::Display for TagSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSource::Spotify => write!(f, "spotify"),
            TagSource::Youtube => write!(f, "youtube"),
        }
    }
}

/// Canonical track entity. Immutable once constructed; `full_title` is the
/// display/search key and the on-disk filename stem, so it never contains `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    /// 1-based position within an ordered resource (playlist/album).
    pub ordinal: Option<u32>,
    pub full_title: String,
    pub album: Option<TrackAlbum>,
    /// Present only for YouTube-origin tracks.
    pub video_id: Option<String>,
    pub tag_source: TagSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    pub images: Vec<String>,
}

/// Canonical resolved playlist, constructed once per run by the resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
    /// Filesystem directory name; policy varies by provider and resource type.
    pub folder_name: String,
    pub tracks: Vec<Track>,
    /// Artwork candidate URLs, best quality first.
    pub images: Vec<String>,
}

/// Artwork buckets derived from Spotify's size-ordered image array
/// (width >= 500 -> high, >= 200 -> medium, else default).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnails {
    pub high: Option<String>,
    pub medium: Option<String>,
    pub default: Option<String>,
}

/// Cached (or fresh) result of a Spotify track search during enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifySearchResult {
    pub artist: String,
    pub title: String,
    pub thumbnails: Option<Thumbnails>,
    pub found: bool,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub ordinal: String,
    pub artists: String,
    pub name: String,
    pub source: String,
}

// --- Spotify API payloads ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyAlbumRef {
    pub name: String,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
}

/// A Spotify track object as returned by the tracks/albums/search endpoints.
/// Fields are optional so the normalizer can report malformed records
/// instead of failing deserialization of a whole page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyTrackObject {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
    pub album: Option<SpotifyAlbumRef>,
}

/// Playlist-item wrapper; `track` is null for removed/unavailable entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyPlaylistItem {
    pub track: Option<SpotifyTrackObject>,
}

/// Raw track record as handed out by the Spotify gateway. The wrapper/bare
/// distinction never leaks past the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SpotifyTrackRecord {
    PlaylistItem(SpotifyPlaylistItem),
    Item(SpotifyTrackObject),
}

/// Resource details from `GET /v1/{type}s/{id}`; only the fields the
/// folder-name policy and artwork fallback need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyDetails {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<SearchTracks>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracks {
    #[serde(default)]
    pub items: Vec<SpotifyTrackObject>,
}

/// Single search hit, pre-joined for the enricher.
#[derive(Debug, Clone)]
pub struct SpotifySearchHit {
    pub artist: String,
    pub title: String,
    pub images: Vec<SpotifyImage>,
}

// --- YouTube API payloads ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeThumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeThumbnails {
    pub default: Option<YoutubeThumbnail>,
    pub medium: Option<YoutubeThumbnail>,
    pub high: Option<YoutubeThumbnail>,
    pub standard: Option<YoutubeThumbnail>,
    pub maxres: Option<YoutubeThumbnail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeSnippet {
    pub title: Option<String>,
    pub channel_title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<YoutubeThumbnails>,
    pub published_at: Option<String>,
}

/// Playlist items carry a plain string id; search results carry `{videoId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YoutubeItemId {
    Video {
        #[serde(rename = "videoId")]
        video_id: String,
    },
    Raw(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeItemContentDetails {
    pub video_id: Option<String>,
}

/// Raw YouTube track record: a playlist item, or a single video synthesized
/// into the same shape so downstream normalization is uniform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeTrackRecord {
    pub id: Option<YoutubeItemId>,
    pub snippet: Option<YoutubeSnippet>,
    pub content_details: Option<YoutubeItemContentDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeListResponse<T> {
    #[serde(default)]
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubePlaylistContentDetails {
    pub item_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubePlaylistResource {
    pub id: String,
    pub snippet: YoutubeSnippet,
    pub content_details: Option<YoutubePlaylistContentDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YoutubeVideoResource {
    pub id: String,
    pub snippet: YoutubeSnippet,
}

/// Normalized resource details from the YouTube gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeDetails {
    pub name: String,
    pub channel_title: String,
    pub description: Option<String>,
    pub thumbnails: Option<YoutubeThumbnails>,
    pub item_count: Option<u64>,
}

/// Best single hit from a YouTube music-category video search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoHit {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
}
