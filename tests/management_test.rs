use playsync::management::{LedgerManager, ResourceCacheManager, SearchCacheManager, friendly_name};
use playsync::types::{
    Playlist, Provider, ResourceType, SourceId, SpotifySearchResult, TagSource, Track,
};

// Helper function to create a test track
fn create_track(id: &str, full_title: &str) -> Track {
    Track {
        id: id.to_string(),
        name: full_title.to_string(),
        artists: vec![],
        ordinal: None,
        full_title: full_title.to_string(),
        album: None,
        video_id: None,
        tag_source: TagSource::Spotify,
    }
}

fn create_playlist(name: &str, tracks: Vec<Track>) -> Playlist {
    Playlist {
        name: name.to_string(),
        folder_name: name.to_string(),
        tracks,
        images: vec![],
    }
}

fn create_source(value: &str) -> SourceId {
    SourceId {
        provider: Provider::Spotify,
        resource_type: ResourceType::Playlist,
        value: value.to_string(),
    }
}

#[test]
fn test_friendly_name_replaces_special_characters() {
    assert_eq!(
        friendly_name("My Awesome Playlist! 🎵", "123abc"),
        "My-Awesome-Playlist-123abc"
    );
    assert_eq!(
        friendly_name("🎸 Rock & Roll 🤘 (2024)", "xyz789"),
        "-Rock-Roll-2024-xyz789"
    );
}

#[test]
fn test_friendly_name_empty_input() {
    assert_eq!(friendly_name("", "empty123"), "-empty123");
}

#[test]
fn test_friendly_name_collapses_consecutive_separators() {
    assert_eq!(friendly_name("a -- b", "id1"), "a-b-id1");
}

#[test]
fn test_search_cache_key_ignores_case_and_padding() {
    assert_eq!(
        SearchCacheManager::key("Artist - Song"),
        SearchCacheManager::key("  artist - song  ")
    );
    assert_ne!(
        SearchCacheManager::key("Artist - Song"),
        SearchCacheManager::key("Artist - Other Song")
    );
}

#[tokio::test]
async fn test_search_cache_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let cache = SearchCacheManager::with_base(dir.path().to_path_buf());

    assert!(cache.get("some query").await.is_none());

    let result = SpotifySearchResult {
        artist: "Artist".to_string(),
        title: "Song".to_string(),
        thumbnails: None,
        found: true,
    };
    cache.put("some query", &result).await.unwrap();

    let loaded = cache.get("some query").await.unwrap();
    assert_eq!(loaded.artist, "Artist");
    assert_eq!(loaded.title, "Song");
    assert!(loaded.found);

    // Case variants share the entry.
    assert!(cache.get("SOME QUERY").await.is_some());
}

#[tokio::test]
async fn test_resource_cache_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ResourceCacheManager::with_base(dir.path().to_path_buf());
    let source = create_source("abc123");

    let missing: Option<Vec<Track>> = cache.get(&source, Some("tracks")).await;
    assert!(missing.is_none());

    let tracks = vec![create_track("t1", "00. A - One")];
    cache.put(&source, Some("tracks"), &tracks).await.unwrap();

    let loaded: Vec<Track> = cache.get(&source, Some("tracks")).await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].full_title, "00. A - One");
}

#[tokio::test]
async fn test_resource_cache_suffix_separates_entries() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ResourceCacheManager::with_base(dir.path().to_path_buf());
    let source = create_source("abc123");

    cache
        .put(&source, Some("tracks"), &vec![create_track("t1", "One")])
        .await
        .unwrap();

    let other: Option<Vec<Track>> = cache.get(&source, None).await;
    assert!(other.is_none());
}

#[tokio::test]
async fn test_ledger_lines_and_skip_on_existing() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = LedgerManager::with_base(dir.path().to_path_buf());

    let playlist = create_playlist(
        "Test Playlist",
        vec![
            create_track("t1", "00. A - One"),
            create_track("t2", "01. B - Two"),
        ],
    );
    let source = create_source("src1");

    assert!(ledger.save(&playlist, &source, false).await.unwrap());

    let content = std::fs::read_to_string(ledger.path(&playlist, &source)).unwrap();
    assert_eq!(content, "t1: 00. A - One\nt2: 01. B - Two\n");

    // Second non-forced save keeps the existing file.
    assert!(!ledger.save(&playlist, &source, false).await.unwrap());
    // Forced save overwrites.
    assert!(ledger.save(&playlist, &source, true).await.unwrap());
}

#[tokio::test]
async fn test_pending_tracks_skips_marked_lines() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = LedgerManager::with_base(dir.path().to_path_buf());

    let playlist = create_playlist(
        "Marked",
        vec![
            create_track("t1", "One"),
            create_track("t2", "Two"),
            create_track("t3", "Three"),
        ],
    );
    let source = create_source("src2");

    // Simulate a downloader having marked two attempts.
    let path = ledger.path(&playlist, &source);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "t1: One ✓\nt2: Two\nt3: Three ✗\n").unwrap();

    let pending = ledger.pending_tracks(&playlist, &source).await.unwrap();
    let ids: Vec<&str> = pending.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t2"]);
}
