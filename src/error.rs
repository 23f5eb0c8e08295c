use thiserror::Error;

use crate::types::{Provider, ResourceType};

/// Error taxonomy for the resolution pipeline.
///
/// Classification, auth and fetch errors are fatal to a single resolution
/// call and propagate unchanged to the caller; `QuotaExceeded` is a distinct
/// signal so callers stop issuing further YouTube searches instead of
/// retrying. Enrichment failures never surface here at all; the enricher
/// degrades to heuristic metadata internally.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The URL matches neither provider's known patterns.
    #[error("invalid source URL (not a recognized Spotify or YouTube form): {url}")]
    InvalidUrl { url: String },

    /// The matched provider does not support this resource type.
    #[error("{provider} does not support resource type '{resource_type}' (source: {value})")]
    UnknownResourceType {
        provider: Provider,
        resource_type: ResourceType,
        value: String,
    },

    /// The provider returned an empty item list for an id lookup.
    #[error("{provider} {resource_type} '{value}' not found")]
    NotFound {
        provider: Provider,
        resource_type: ResourceType,
        value: String,
    },

    /// The Spotify client-credentials exchange yielded no token.
    #[error("Spotify authentication failed; no access token could be obtained")]
    AuthFailed,

    /// YouTube search failed, most commonly because the daily quota ran out.
    #[error("YouTube search failed (quota exceeded?): {reason}")]
    QuotaExceeded { reason: String },

    /// A provider record is missing mandatory fields. Aborts the whole
    /// resolution rather than silently truncating the playlist.
    #[error("malformed {provider} track record at position {index}: {reason}")]
    MalformedRecord {
        provider: Provider,
        index: usize,
        reason: String,
    },

    /// Transport or non-2xx failure on a resource/track-listing call.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
