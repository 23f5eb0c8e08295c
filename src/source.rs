//! URL classification.
//!
//! Turns an arbitrary source URL into a typed [`SourceId`] (provider +
//! resource type + id) or an [`ResolveError::InvalidUrl`]. Pure and
//! deterministic; no I/O.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::ResolveError,
    types::{Provider, ResourceType, SourceId},
};

static SPOTIFY_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://open\.spotify\.com/(playlist|album|track)/([0-9A-Za-z]+)")
        .expect("spotify url regex is valid")
});

/// Classifies a source URL into a typed identifier.
///
/// Spotify URLs are matched by regex on `open.spotify.com/{type}/{id}`;
/// trailing query strings are ignored. YouTube URLs are parsed and checked
/// in order: `youtu.be` short link, `v=` query param, `list=` query param,
/// `channel=` query param. `v` deliberately wins over `list` when both are
/// present so a "video within playlist" link resolves the video.
///
/// Returns `Ok(None)` for `/channel/...` path-form YouTube URLs: the source
/// this mirrors treats those as an unresolved identifier rather than a
/// channel id or an error, and that behavior is preserved (see DESIGN.md).
///
/// # Errors
///
/// `ResolveError::InvalidUrl` when the URL matches neither provider's
/// known patterns.
pub fn classify(url: &str) -> Result<Option<SourceId>, ResolveError> {
    log::debug!("classifying source URL: {url}");

    if let Some(caps) = SPOTIFY_URL_RE.captures(url) {
        let resource_type = match &caps[1] {
            "playlist" => ResourceType::Playlist,
            "album" => ResourceType::Album,
            _ => ResourceType::Track,
        };
        log::debug!("classified as spotify {resource_type}: {}", &caps[2]);
        return Ok(Some(SourceId {
            provider: Provider::Spotify,
            resource_type,
            value: caps[2].to_string(),
        }));
    }

    classify_youtube(url)
}

fn classify_youtube(url: &str) -> Result<Option<SourceId>, ResolveError> {
    let parsed = reqwest::Url::parse(url).map_err(|_| ResolveError::InvalidUrl {
        url: url.to_string(),
    })?;

    let host = parsed.host_str().unwrap_or_default();

    // Short-link form: youtu.be/{videoId}
    if host.contains("youtu.be") {
        if let Some(segment) = parsed.path_segments().and_then(|mut s| s.next()) {
            if !segment.is_empty() {
                log::debug!("classified as youtube video (short link): {segment}");
                return Ok(Some(youtube_id(ResourceType::Video, segment)));
            }
        }
    }

    let query = |key: &str| {
        parsed
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.to_string())
    };

    if let Some(v) = query("v") {
        log::debug!("classified as youtube video: {v}");
        return Ok(Some(youtube_id(ResourceType::Video, &v)));
    }
    if let Some(list) = query("list") {
        log::debug!("classified as youtube playlist: {list}");
        return Ok(Some(youtube_id(ResourceType::Playlist, &list)));
    }
    if let Some(channel) = query("channel") {
        log::debug!("classified as youtube channel: {channel}");
        return Ok(Some(youtube_id(ResourceType::Channel, &channel)));
    }

    // Path-form channel URLs yield an unresolved identifier, not an error.
    if host.contains("youtube.com") && parsed.path().starts_with("/channel/") {
        log::debug!("path-form channel URL left unresolved: {url}");
        return Ok(None);
    }

    Err(ResolveError::InvalidUrl {
        url: url.to_string(),
    })
}

fn youtube_id(resource_type: ResourceType, value: &str) -> SourceId {
    SourceId {
        provider: Provider::Youtube,
        resource_type,
        value: value.to_string(),
    }
}
