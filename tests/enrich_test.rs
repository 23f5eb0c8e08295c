use playsync::enrich::{
    Enricher, bucket_thumbnails, clean_title, normalize_query, split_artist_title,
};
use playsync::resolver::{spotify_folder_name, youtube_folder_name};
use playsync::spotify::{SpotifyApi, SpotifyConfig};
use playsync::types::{
    ResourceType, SpotifyArtist, SpotifyDetails, SpotifyImage, TagSource, YoutubeDetails,
    YoutubeItemContentDetails, YoutubeSnippet, YoutubeTrackRecord,
};

fn create_image(url: &str, width: u32) -> SpotifyImage {
    SpotifyImage {
        url: url.to_string(),
        width: Some(width),
        height: Some(width),
    }
}

// Gateway pointed at a closed port; every request fails fast.
fn unreachable_spotify() -> SpotifyApi {
    SpotifyApi::new(SpotifyConfig {
        api_url: "http://127.0.0.1:1".to_string(),
        token_url: "http://127.0.0.1:1/token".to_string(),
        client_id: "id".to_string(),
        client_secret: "secret".to_string(),
    })
}

#[test]
fn test_normalize_query_strips_official_markers() {
    assert_eq!(
        normalize_query("Artist - Song (Official Video)"),
        "Artist - Song"
    );
    assert_eq!(
        normalize_query("Artist - Song [Official Audio]"),
        "Artist - Song"
    );
}

#[test]
fn test_normalize_query_strips_live_markers() {
    assert_eq!(normalize_query("Artist - Song - Live"), "Artist - Song");
    assert_eq!(
        normalize_query("Artist - Song - Live at Wembley"),
        "Artist - Song"
    );
    assert_eq!(normalize_query("Artist - Song (Live)"), "Artist - Song");
}

#[test]
fn test_normalize_query_strips_venue_and_year() {
    assert_eq!(normalize_query("Artist - Song @ Glastonbury"), "Artist - Song");
    assert_eq!(
        normalize_query("Artist - Song - Official Video 2019"),
        "Artist - Song"
    );
}

#[test]
fn test_all_noise_title_normalizes_to_empty() {
    assert_eq!(normalize_query("(Live) [Official]"), "");
}

#[test]
fn test_normalize_query_keeps_plain_titles() {
    assert_eq!(normalize_query("Artist - Song"), "Artist - Song");
    assert_eq!(normalize_query("  Artist  -  Song  "), "Artist - Song");
}

#[test]
fn test_clean_title_removes_bracketed_cruft() {
    assert_eq!(clean_title("Song (Official Video)"), "Song");
    assert_eq!(clean_title("Song [HD] (Lyrics)"), "Song");
    assert_eq!(clean_title("Song (Remastered 2011)"), "Song");
}

#[test]
fn test_clean_title_keeps_meaningful_parentheses() {
    assert_eq!(clean_title("Song (Part II)"), "Song (Part II)");
}

#[test]
fn test_split_artist_title_on_separator() {
    let (artist, title) = split_artist_title("Artist - Song", "Channel");
    assert_eq!(artist, "Artist");
    assert_eq!(title, "Song");
}

#[test]
fn test_split_without_separator_uses_channel() {
    let (artist, title) = split_artist_title("Just A Song", "Some Channel");
    assert_eq!(artist, "Some Channel");
    assert_eq!(title, "Just A Song");
}

#[test]
fn test_split_strips_topic_suffix_from_channel() {
    let (artist, title) = split_artist_title("Just A Song", "Artist Name - Topic");
    assert_eq!(artist, "Artist Name");
    assert_eq!(title, "Just A Song");
}

#[test]
fn test_bucket_thumbnails_by_width() {
    let images = vec![
        create_image("http://img/640", 640),
        create_image("http://img/300", 300),
        create_image("http://img/64", 64),
    ];
    let thumbs = bucket_thumbnails(&images);
    assert_eq!(thumbs.high.as_deref(), Some("http://img/640"));
    assert_eq!(thumbs.medium.as_deref(), Some("http://img/300"));
    assert_eq!(thumbs.default.as_deref(), Some("http://img/64"));
}

#[test]
fn test_bucket_thumbnails_partial() {
    let images = vec![create_image("http://img/64", 64)];
    let thumbs = bucket_thumbnails(&images);
    assert!(thumbs.high.is_none());
    assert!(thumbs.medium.is_none());
    assert_eq!(thumbs.default.as_deref(), Some("http://img/64"));
}

#[test]
fn test_spotify_playlist_folder_uses_name() {
    let details = SpotifyDetails {
        name: "My Mix".to_string(),
        artists: vec![],
        images: vec![],
    };
    let name = spotify_folder_name(ResourceType::Playlist, &details).unwrap();
    assert_eq!(name, "My Mix");
}

#[test]
fn test_spotify_album_folder_includes_artists() {
    let details = SpotifyDetails {
        name: "The Album".to_string(),
        artists: vec![
            SpotifyArtist {
                name: "A".to_string(),
            },
            SpotifyArtist {
                name: "B".to_string(),
            },
        ],
        images: vec![],
    };
    let name = spotify_folder_name(ResourceType::Album, &details).unwrap();
    assert_eq!(name, "A, B - The Album");
}

#[test]
fn test_spotify_single_track_folder_is_misc() {
    let details = SpotifyDetails {
        name: "Song".to_string(),
        artists: vec![],
        images: vec![],
    };
    let name = spotify_folder_name(ResourceType::Track, &details).unwrap();
    assert_eq!(name, "Misc");
}

#[test]
fn test_youtube_video_folder_includes_channel() {
    let details = YoutubeDetails {
        name: "Video Title".to_string(),
        channel_title: "Channel".to_string(),
        description: None,
        thumbnails: None,
        item_count: Some(1),
    };
    let name = youtube_folder_name(ResourceType::Video, &details).unwrap();
    assert_eq!(name, "Channel - Video Title");
}

#[test]
fn test_youtube_playlist_folder_uses_name() {
    let details = YoutubeDetails {
        name: "Liked Music".to_string(),
        channel_title: "Someone".to_string(),
        description: None,
        thumbnails: None,
        item_count: None,
    };
    let name = youtube_folder_name(ResourceType::Playlist, &details).unwrap();
    assert_eq!(name, "Liked Music");
}

fn create_record(title: &str, channel: &str) -> YoutubeTrackRecord {
    YoutubeTrackRecord {
        id: None,
        snippet: Some(YoutubeSnippet {
            title: Some(title.to_string()),
            channel_title: Some(channel.to_string()),
            description: None,
            thumbnails: None,
            published_at: None,
        }),
        content_details: Some(YoutubeItemContentDetails {
            video_id: Some("vid0".to_string()),
        }),
    }
}

#[tokio::test]
async fn test_all_noise_title_never_touches_the_network() {
    // Listener that records connection attempts without answering them.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    let spotify = SpotifyApi::new(SpotifyConfig {
        api_url: format!("http://{addr}"),
        token_url: format!("http://{addr}/token"),
        client_id: "id".to_string(),
        client_secret: "secret".to_string(),
    });
    let enricher = Enricher::new(&spotify, None);

    let track = enricher
        .enrich(create_record("(Live) [Official]", "Some Channel"), 0)
        .await
        .unwrap();
    assert_eq!(track.tag_source, TagSource::Youtube);

    // No connection may have reached the listener's accept queue.
    match listener.accept() {
        Err(e) => assert_eq!(e.kind(), std::io::ErrorKind::WouldBlock),
        Ok(_) => panic!("title normalizing to empty must not issue a search request"),
    }
}

#[tokio::test]
async fn test_non_noise_title_attempts_a_search_request() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept one connection and drop it so the client errors out fast.
    let accepted = std::thread::spawn(move || listener.accept().is_ok());

    let spotify = SpotifyApi::new(SpotifyConfig {
        api_url: format!("http://{addr}"),
        token_url: format!("http://{addr}/token"),
        client_id: "id".to_string(),
        client_secret: "secret".to_string(),
    });
    let enricher = Enricher::new(&spotify, None);

    let track = enricher
        .enrich(create_record("Artist - Song", "Some Channel"), 0)
        .await
        .unwrap();
    // The dropped connection degrades enrichment to the heuristic path.
    assert_eq!(track.tag_source, TagSource::Youtube);
    assert_eq!(track.full_title, "Artist - Song");

    assert!(accepted.join().unwrap());
}

#[tokio::test]
async fn test_enrichment_falls_back_when_search_unavailable() {
    let spotify = unreachable_spotify();
    let enricher = Enricher::new(&spotify, None);

    let record = YoutubeTrackRecord {
        id: None,
        snippet: Some(YoutubeSnippet {
            title: Some("Artist - Song (Official Video)".to_string()),
            channel_title: Some("Some Channel".to_string()),
            description: None,
            thumbnails: None,
            published_at: None,
        }),
        content_details: Some(YoutubeItemContentDetails {
            video_id: Some("vid1".to_string()),
        }),
    };

    let track = enricher.enrich(record, 0).await.unwrap();
    assert_eq!(track.tag_source, TagSource::Youtube);
    assert_eq!(track.full_title, "Artist - Song");
    assert_eq!(track.video_id, Some("vid1".to_string()));
}

#[tokio::test]
async fn test_enrichment_fallback_seeds_artist_from_channel() {
    let spotify = unreachable_spotify();
    let enricher = Enricher::new(&spotify, None);

    let record = YoutubeTrackRecord {
        id: None,
        snippet: Some(YoutubeSnippet {
            title: Some("Just A Song".to_string()),
            channel_title: Some("Artist Name - Topic".to_string()),
            description: None,
            thumbnails: None,
            published_at: None,
        }),
        content_details: Some(YoutubeItemContentDetails {
            video_id: Some("vid2".to_string()),
        }),
    };

    let track = enricher.enrich(record, 0).await.unwrap();
    assert_eq!(track.artists, vec!["Artist Name"]);
    assert_eq!(track.full_title, "Artist Name - Just A Song");
}
