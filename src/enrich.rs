//! Cross-provider enrichment: YouTube video titles carry noise and no
//! structured artist field, so each item is looked up on Spotify (through a
//! disk cache) and the best hit supplies proper tags. When the lookup comes
//! back empty the title is split heuristically instead; an enrichment miss
//! never fails a resolution.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ResolveError;
use crate::management::SearchCacheManager;
use crate::normalize::{sanitize_name, youtube_parts};
use crate::spotify::SpotifyApi;
use crate::types::{
    SpotifyImage, SpotifySearchResult, TagSource, Thumbnails, Track, YoutubeTrackRecord,
};

/// Noise commonly appended to music video titles. Applied in order before a
/// title is used as a search query.
static NOISE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\s*-\s*live\s+at\s+.*$",
        r"(?i)\s*-\s*live\s*$",
        r"(?i)\s*@.*$",
        r"(?i)\s*\(live[^)]*\)",
        r"(?i)\s*\[live[^\]]*\]",
        r"(?i)\s*\(official[^)]*\)",
        r"(?i)\s*\[official[^\]]*\]",
        r"(?i)\s*\([^)]*remix[^)]*\)",
        r"(?i)\s*\[[^\]]*remix[^\]]*\]",
        r"(?i)\s*\([^)]*cover[^)]*\)",
        r"(?i)\s*\[[^\]]*cover[^\]]*\]",
        r"(?i)\s*-\s*[^-]*\d{4}[^-]*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Bracketed production keywords that add nothing to a display title.
static TITLE_CRUFT: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\s*\((?:[^)]*\b(?:official|video|audio|lyrics?|visualizer|remaster(?:ed)?|hd|hq|4k|live)\b[^)]*)\)",
        r"(?i)\s*\[(?:[^\]]*\b(?:official|video|audio|lyrics?|visualizer|remaster(?:ed)?|hd|hq|4k|live)\b[^\]]*)\]",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips noise patterns from a raw video title to form a search query.
/// May legitimately return an empty string (all-noise titles), in which
/// case no search is attempted.
pub fn normalize_query(raw_title: &str) -> String {
    let mut query = raw_title.to_string();
    for pattern in NOISE_PATTERNS.iter() {
        query = pattern.replace_all(&query, "").into_owned();
    }
    collapse_whitespace(&query)
}

/// Strips bracketed production keywords for display purposes.
pub fn clean_title(raw_title: &str) -> String {
    let mut title = raw_title.to_string();
    for pattern in TITLE_CRUFT.iter() {
        title = pattern.replace_all(&title, "").into_owned();
    }
    collapse_whitespace(&title)
}

/// Splits a cleaned title on the first " - " into artist and title. When no
/// separator is present the whole string is the title and `default_artist`
/// (the uploading channel, minus YouTube's auto-generated " - Topic"
/// suffix) fills in as the artist.
pub fn split_artist_title(cleaned: &str, default_artist: &str) -> (String, String) {
    let default_artist = default_artist
        .strip_suffix(" - Topic")
        .unwrap_or(default_artist);

    match cleaned.split_once(" - ") {
        Some((artist, title)) => (artist.trim().to_string(), title.trim().to_string()),
        None => (default_artist.trim().to_string(), cleaned.trim().to_string()),
    }
}

/// Buckets Spotify's size-ordered image array by width: >= 500 is high,
/// >= 200 is medium, the rest default. First image wins per bucket.
pub fn bucket_thumbnails(images: &[SpotifyImage]) -> Thumbnails {
    let mut thumbnails = Thumbnails {
        high: None,
        medium: None,
        default: None,
    };

    for image in images {
        let slot = match image.width {
            Some(width) if width >= 500 => &mut thumbnails.high,
            Some(width) if width >= 200 => &mut thumbnails.medium,
            _ => &mut thumbnails.default,
        };
        if slot.is_none() {
            *slot = Some(image.url.clone());
        }
    }

    thumbnails
}

/// Enrichment context for one resolution run. The cache is optional so
/// `--no-cache` runs and tests can go without disk state.
pub struct Enricher<'a> {
    pub spotify: &'a SpotifyApi,
    pub cache: Option<&'a SearchCacheManager>,
}

impl<'a> Enricher<'a> {
    pub fn new(spotify: &'a SpotifyApi, cache: Option<&'a SearchCacheManager>) -> Self {
        Self { spotify, cache }
    }

    /// Turns one YouTube record into an enriched [`Track`].
    ///
    /// A usable Spotify hit tags the track `spotify`; otherwise the title
    /// is split heuristically and the track stays tagged `youtube`. Only a
    /// structurally malformed record is an error.
    pub async fn enrich(
        &self,
        record: YoutubeTrackRecord,
        index: usize,
    ) -> Result<Track, ResolveError> {
        let parts = youtube_parts(record, index)?;

        let lookup = self.lookup(&parts.raw_title).await;
        let (artist, title, tag_source) = match lookup {
            Some(hit) if hit.found && !hit.artist.is_empty() && !hit.title.is_empty() => {
                (hit.artist, hit.title, TagSource::Spotify)
            }
            _ => {
                let cleaned = clean_title(&parts.raw_title);
                // Seed the splitter with an artist guessed from the raw
                // title, so a separator dropped during cleaning still yields
                // an artist; the channel covers titles with no separator.
                let raw_artist = parts
                    .raw_title
                    .split_once(" - ")
                    .map(|(artist, _)| artist.trim())
                    .unwrap_or(parts.channel_title.as_str());
                let (artist, title) = split_artist_title(&cleaned, raw_artist);
                (artist, title, TagSource::Youtube)
            }
        };

        let full_title = if artist.is_empty() {
            sanitize_name(&title)
        } else {
            sanitize_name(&format!("{artist} - {title}"))
        };

        Ok(Track {
            id: parts.video_id.clone(),
            name: title,
            artists: if artist.is_empty() {
                Vec::new()
            } else {
                vec![artist]
            },
            ordinal: None,
            full_title,
            album: None,
            video_id: Some(parts.video_id),
            tag_source,
        })
    }

    /// Cache-through Spotify lookup. Every failure path (empty query after
    /// noise stripping, no token, no hit) is silent beyond a debug log.
    async fn lookup(&self, raw_title: &str) -> Option<SpotifySearchResult> {
        let query = normalize_query(raw_title);
        if query.is_empty() {
            log::debug!("Skipping enrichment: '{raw_title}' is all noise");
            return None;
        }

        if let Some(cache) = self.cache {
            if let Some(cached) = cache.get(&query).await {
                log::debug!("Search cache hit for '{query}'");
                return Some(cached);
            }
        }

        let token = self.spotify.fetch_access_token().await?;
        let hit = self.spotify.search_track(&query, &token).await?;

        let result = SpotifySearchResult {
            artist: hit.artist,
            title: hit.title,
            thumbnails: Some(bucket_thumbnails(&hit.images)),
            found: true,
        };

        if let Some(cache) = self.cache {
            if let Err(err) = cache.put(&query, &result).await {
                log::debug!("Failed to cache search result for '{query}': {err:?}");
            }
        }

        Some(result)
    }
}
