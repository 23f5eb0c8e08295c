use crate::{config, error, info, success, warning, youtube::YoutubeApi};

pub async fn search(query: String) {
    let api = YoutubeApi::new(config::youtube_config());

    match api.search_video(&query).await {
        Ok(Some(hit)) => {
            success!("Best match for '{}':", query);
            info!("{} - {}", hit.channel_title, hit.title);
            info!("https://www.youtube.com/watch?v={}", hit.video_id);
        }
        Ok(None) => warning!("No video found for '{}'", query),
        Err(e) => error!("Search failed. Err: {}", e),
    }
}
