use playsync::management::ResourceCacheManager;
use playsync::resolver::Resolver;
use playsync::spotify::SpotifyConfig;
use playsync::types::{
    Provider, ResourceType, SourceId, YoutubeDetails, YoutubeItemContentDetails, YoutubeSnippet,
    YoutubeTrackRecord,
};
use playsync::youtube::YoutubeConfig;

// Gateway configs pointed at a closed port; any network call fails fast.
fn unreachable_spotify_config() -> SpotifyConfig {
    SpotifyConfig {
        api_url: "http://127.0.0.1:1".to_string(),
        token_url: "http://127.0.0.1:1/token".to_string(),
        client_id: "id".to_string(),
        client_secret: "secret".to_string(),
    }
}

fn unreachable_youtube_config() -> YoutubeConfig {
    YoutubeConfig {
        api_url: "http://127.0.0.1:1".to_string(),
        api_key: "key".to_string(),
    }
}

fn create_record(video_id: &str, title: &str, channel: &str) -> YoutubeTrackRecord {
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
            video_id: Some(video_id.to_string()),
        }),
    }
}

#[tokio::test]
async fn test_warm_cache_resolution_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let source = SourceId {
        provider: Provider::Youtube,
        resource_type: ResourceType::Playlist,
        value: "PLwarm123".to_string(),
    };

    // Warm the resource cache so no gateway call is needed.
    let warmer = ResourceCacheManager::with_base(dir.path().to_path_buf());
    let details = YoutubeDetails {
        name: "Warm Mix".to_string(),
        channel_title: "Someone".to_string(),
        description: None,
        thumbnails: None,
        item_count: Some(2),
    };
    warmer.put(&source, None, &details).await.unwrap();
    let records = vec![
        create_record("vid1", "Artist One - First Song (Official Video)", "Chan A"),
        create_record("vid2", "Second Song", "Artist Two - Topic"),
    ];
    warmer.put(&source, Some("tracks"), &records).await.unwrap();

    let url = "https://www.youtube.com/playlist?list=PLwarm123";
    let resolve_titles = || async {
        let resolver = Resolver::with_managers(
            unreachable_spotify_config(),
            unreachable_youtube_config(),
            Some(ResourceCacheManager::with_base(dir.path().to_path_buf())),
            None,
        );
        let playlist = resolver.resolve(url).await.unwrap();
        (
            playlist.name.clone(),
            playlist
                .tracks
                .iter()
                .map(|t| t.full_title.clone())
                .collect::<Vec<_>>(),
        )
    };

    let (first_name, first_titles) = resolve_titles().await;
    let (second_name, second_titles) = resolve_titles().await;

    assert_eq!(first_name, "Warm Mix");
    assert_eq!(first_titles.len(), 2);
    assert!(first_titles.iter().all(|t| !t.is_empty()));
    assert_eq!(first_titles, second_titles);
    assert_eq!(first_name, second_name);
}
