use std::path::PathBuf;

use crate::types::{Playlist, SourceId, Track};

/// Marks appended (out of band, by the downloader) to ledger lines once a
/// track has been attempted.
pub const CHECK_MARK: &str = "✓";
pub const FAIL_MARK: &str = "✗";

#[derive(Debug)]
pub enum LedgerError {
    IoError(std::io::Error),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::IoError(err)
    }
}

/// Filesystem-safe ledger filename for a resource: every non-alphanumeric
/// run becomes a single `-`, with the resource id appended for uniqueness.
pub fn friendly_name(name: &str, id: &str) -> String {
    let mut result = String::with_capacity(name.len() + id.len() + 1);
    let mut last_dash = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch);
            last_dash = false;
        } else if !last_dash {
            result.push('-');
            last_dash = true;
        }
    }
    while result.ends_with('-') {
        result.pop();
    }

    result.push('-');
    result.push_str(id);
    result
}

/// Persists one text ledger per resolved resource: a `{id}: {full_title}`
/// line per track, consumed and annotated by the downstream downloader.
pub struct LedgerManager {
    base: PathBuf,
}

impl LedgerManager {
    pub fn new() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push("playsync/playlists");
        Self { base }
    }

    pub fn with_base(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn path(&self, playlist: &Playlist, source: &SourceId) -> PathBuf {
        self.base
            .join(format!("{}.txt", friendly_name(&playlist.name, &source.value)))
    }

    /// Writes the ledger for a playlist. An existing ledger is left alone
    /// unless `force` is set, so attempt marks survive re-imports.
    pub async fn save(
        &self,
        playlist: &Playlist,
        source: &SourceId,
        force: bool,
    ) -> Result<bool, LedgerError> {
        let path = self.path(playlist, source);

        if !force && async_fs::metadata(&path).await.is_ok() {
            log::debug!("Ledger already exists, keeping: {}", path.display());
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let mut content = String::new();
        for track in &playlist.tracks {
            content.push_str(&format!("{}: {}\n", track.id, track.full_title));
        }
        async_fs::write(&path, content).await?;
        Ok(true)
    }

    /// Tracks whose ledger line carries no attempt mark yet. Tracks with no
    /// ledger line at all (added since the last import) also count.
    pub async fn pending_tracks(
        &self,
        playlist: &Playlist,
        source: &SourceId,
    ) -> Result<Vec<Track>, LedgerError> {
        let path = self.path(playlist, source);
        let content = async_fs::read_to_string(&path).await?;

        let attempted: Vec<&str> = content
            .lines()
            .filter(|line| line.contains(CHECK_MARK) || line.contains(FAIL_MARK))
            .filter_map(|line| line.split(':').next())
            .map(str::trim)
            .collect();

        Ok(playlist
            .tracks
            .iter()
            .filter(|track| !attempted.contains(&track.id.as_str()))
            .cloned()
            .collect())
    }
}
