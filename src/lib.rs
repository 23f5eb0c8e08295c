//! Playlist Mirroring CLI Library
//!
//! This library resolves a music source URL (Spotify playlist/album/track,
//! YouTube playlist/video) into a canonical list of tracks, enriches
//! YouTube-sourced tracks with Spotify metadata, and persists a resumable
//! text ledger for the download stage.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `enrich` - Cross-provider metadata enrichment (YouTube -> Spotify)
//! - `error` - The `ResolveError` taxonomy shared by the core
//! - `management` - Disk caches and the playlist ledger
//! - `normalize` - Provider-record to canonical `Track` conversion
//! - `resolver` - The playlist resolution orchestrator
//! - `source` - URL classification into provider/resource-type/id
//! - `spotify` - Spotify Web API gateway
//! - `types` - Data structures and type definitions
//! - `youtube` - YouTube Data API gateway
//!
//! # Example
//!
//! ```
//! use playsync::{config, resolver::Resolver};
//!
//! #[tokio::main]
//! async fn main() -> playsync::Res<()> {
//!     config::load_env().await?;
//!     let resolver = Resolver::new(config::spotify_config(), config::youtube_config(), true);
//!     let playlist = resolver.resolve("https://open.spotify.com/playlist/37i9dQ").await?;
//!     println!("{} tracks", playlist.tracks.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod enrich;
pub mod error;
pub mod management;
pub mod normalize;
pub mod resolver;
pub mod source;
pub mod spotify;
pub mod types;
pub mod youtube;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the CLI layer
/// using a boxed dynamic error trait object, keeping Send + Sync bounds
/// for async contexts. The core pipeline uses the typed
/// [`error::ResolveError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates in the CLI layer. The macro accepts the same arguments
/// as `println!`.
///
/// # Example
///
/// ```
/// info!("Resolving playlist...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. The macro accepts the same
/// arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Ledger written to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Should only be used in the CLI
/// layer for fatal errors where recovery is not possible; the core pipeline
/// propagates typed errors instead.
///
/// # Example
///
/// ```
/// error!("Cannot resolve {}: {}", url, err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program
/// termination. The macro accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// warning!("No Spotify match for \"{}\", using heuristic metadata", title);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
