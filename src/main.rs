#![allow(non_snake_case)]

mod app;
mod audio_bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use serenade_core::{Personalization, RelationshipClock, SongRegistry};

/// Default public address of the card, used in share links
const DEFAULT_SHARE_URL: &str = "https://serenade.example/";

/// Card settings, set once from the command line
static CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Everything the card needs that does not change while it is open.
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Names used when the route carries no query
    pub names: Personalization,
    pub clock: RelationshipClock,
    pub songs: SongRegistry,
    /// Public url the share links point at
    pub share_url: String,
    /// Ask the listener to enable music before the card opens
    pub audio_prompt: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            names: Personalization::default(),
            clock: RelationshipClock::default(),
            songs: SongRegistry::builtin(),
            share_url: DEFAULT_SHARE_URL.to_string(),
            audio_prompt: true,
        }
    }
}

/// Get the card configuration (set from command line or default)
pub fn config() -> &'static CardConfig {
    CONFIG.get_or_init(CardConfig::default)
}

/// Serenade - a musical love letter
#[derive(Parser, Debug)]
#[command(name = "serenade-desktop")]
#[command(about = "Serenade - a love letter that plays the songs it mentions")]
struct Args {
    /// Who the letter is from
    #[arg(long)]
    from: Option<String>,

    /// Who the letter is for
    #[arg(long)]
    to: Option<String>,

    /// Day the relationship started (YYYY-MM-DD)
    #[arg(long)]
    since: Option<String>,

    /// JSON file mapping song titles to audio urls
    #[arg(long)]
    songs: Option<PathBuf>,

    /// Public url used in share links
    #[arg(long, default_value = DEFAULT_SHARE_URL)]
    share_url: String,

    /// Open the card without the "enable music" prompt
    #[arg(long)]
    skip_audio_prompt: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn build_config(args: Args) -> CardConfig {
    let mut config = CardConfig {
        names: Personalization::new(
            args.from.unwrap_or_default(),
            args.to.unwrap_or_default(),
        ),
        share_url: args.share_url,
        audio_prompt: !args.skip_audio_prompt,
        ..CardConfig::default()
    };

    if let Some(since) = args.since.as_deref() {
        match RelationshipClock::from_date_str(since) {
            Ok(clock) => config.clock = clock,
            Err(e) => tracing::error!("Ignoring --since: {}", e),
        }
    }

    if let Some(path) = args.songs.as_deref() {
        if let Err(e) = config.songs.load_overrides(path) {
            tracing::error!("Failed to load song urls from {:?}: {}", path, e);
        }
    }

    config
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = build_config(args);
    tracing::info!(
        from = %config.names.from,
        to = %config.names.to,
        since = %config.clock.start(),
        songs = config.songs.titles_with_urls().len(),
        "Starting Serenade"
    );
    let title = config.names.headline();
    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 1000.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
