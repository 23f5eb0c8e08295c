use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, info,
    resolver::Resolver,
    types::TrackTableRow,
};

pub async fn resolve(url: String, json: bool, no_cache: bool) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Resolving source...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let resolver = Resolver::new(config::spotify_config(), config::youtube_config(), !no_cache);
    let playlist = match resolver.resolve(&url).await {
        Ok(playlist) => playlist,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot resolve {}. Err: {}", url, e);
        }
    };
    pb.finish_and_clear();

    if json {
        match serde_json::to_string_pretty(&playlist) {
            Ok(output) => println!("{}", output),
            Err(e) => error!("Cannot serialize playlist. Err: {}", e),
        }
        return;
    }

    let table_rows: Vec<TrackTableRow> = playlist
        .tracks
        .iter()
        .map(|t| TrackTableRow {
            ordinal: t
                .ordinal
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            artists: t.artists.join(", "),
            name: t.name.clone(),
            source: t.tag_source.to_string(),
        })
        .collect();

    let table = Table::new(table_rows).to_string();
    println!("{}", table);
    info!(
        "'{}': {} track(s), folder '{}'",
        playlist.name,
        playlist.tracks.len(),
        playlist.folder_name
    );
}
