use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error, info,
    management::LedgerManager,
    resolver::Resolver,
    source, success,
};

pub async fn import(url: String, no_cache: bool, force: bool) {
    let source = match source::classify(&url) {
        Ok(Some(source)) => source,
        Ok(None) => error!("Channel URLs cannot be imported; pass a playlist or video URL."),
        Err(e) => error!("Cannot import {}. Err: {}", url, e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!(
        "Resolving {} {}...",
        source.provider, source.resource_type
    ));
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

    info!(
        "Resolved '{}' with {} track(s) into folder '{}'",
        playlist.name,
        playlist.tracks.len(),
        playlist.folder_name
    );

    let ledger = LedgerManager::new();
    match ledger.save(&playlist, &source, force).await {
        Ok(true) => success!(
            "Ledger written: {}",
            ledger.path(&playlist, &source).display()
        ),
        Ok(false) => info!(
            "Ledger already exists, kept as-is: {} (use --force to overwrite)",
            ledger.path(&playlist, &source).display()
        ),
        Err(e) => error!("Cannot write ledger. Err: {:?}", e),
    }
}
