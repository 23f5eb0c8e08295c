use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playsync::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve a playlist URL and write its download ledger
    Import(ImportOptions),

    /// Resolve a playlist URL and print the track list
    Resolve(ResolveOptions),

    /// Search YouTube's music category for a video
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ImportOptions {
    /// Spotify or YouTube playlist/album/track/video URL
    url: String,

    /// Bypass the local resource and search caches
    #[clap(long)]
    no_cache: bool,

    /// Overwrite an existing ledger (discards attempt marks)
    #[clap(long)]
    force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// Spotify or YouTube playlist/album/track/video URL
    url: String,

    /// Print the resolved playlist as JSON instead of a table
    #[clap(long)]
    json: bool,

    /// Bypass the local resource and search caches
    #[clap(long)]
    no_cache: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text query, e.g. an artist and title
    query: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Import(opt) => cli::import(opt.url, opt.no_cache, opt.force).await,
        Command::Resolve(opt) => cli::resolve(opt.url, opt.json, opt.no_cache).await,
        Command::Search(opt) => cli::search(opt.query).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
