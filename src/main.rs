use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spoticli::{
    cli::{self, SearchKind, UrlChoice},
    config, error,
};

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
    /// Generate the config file interactively
    Cfg,

    /// Authorize with the Spotify API
    Auth,

    /// Resume playback, or play a Spotify URL
    Play(PlayOptions),

    /// Pause playback
    Pause(DeviceOption),

    /// Skip to the next track
    Next(DeviceOption),

    /// Skip to the previous track
    Prev(DeviceOption),

    /// Seek within the current track
    Seek(SeekOptions),

    /// Increase the volume
    Volup(VolumeOptions),

    /// Decrease the volume
    Voldown(VolumeOptions),

    /// Display info about the current playback
    Now(NowOptions),

    /// Toggle shuffling on or off
    Shuffle(ShuffleOptions),

    /// Create a new playlist
    Cp(CreatePlaylistOptions),

    /// Query Spotify's catalog
    Search(SearchOptions),

    /// Display recently played tracks
    Recent(RecentOptions),

    /// Play or queue a random album from the library
    Rsa(DeviceOption),

    /// Add the current track to one or more playlists
    Actp,

    /// Save a playlist's albums to the library
    Spa(SpaOptions),

    /// Add a track, album, or playlist to the queue from a Spotify URL
    Atq(AtqOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct DeviceOption {
    /// Target device id
    #[clap(long, env = "SPOTICLI_DEVICE")]
    device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// Spotify track, album, or playlist URL to play
    url: Option<String>,

    #[clap(long, env = "SPOTICLI_DEVICE")]
    device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SeekOptions {
    /// Target position as MM:SS
    timestamp: String,

    #[clap(long, env = "SPOTICLI_DEVICE")]
    device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct VolumeOptions {
    /// Change amount in percent
    #[clap(default_value_t = 10)]
    amount: u8,

    #[clap(long, env = "SPOTICLI_DEVICE")]
    device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct NowOptions {
    /// Display additional info (BPM, time signature, URL)
    #[clap(short, long)]
    verbose: bool,

    /// Which playback URL to display
    #[clap(short, long, value_enum, default_value = "t")]
    url: UrlChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShuffleState {
    On,
    Off,
}

#[derive(Parser, Debug, Clone)]
pub struct ShuffleOptions {
    /// Desired shuffle state
    #[clap(value_enum)]
    state: ShuffleState,

    #[clap(long, env = "SPOTICLI_DEVICE")]
    device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CreatePlaylistOptions {
    /// Name of the playlist
    name: String,

    /// Create the playlist as private
    #[clap(long)]
    private: bool,

    /// Create the playlist as collaborative (implies private)
    #[clap(short, long)]
    collaborative: bool,

    /// Playlist description
    #[clap(short, long, default_value = "")]
    description: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    query: String,

    /// Catalog type to search
    #[clap(short = 't', long = "type", value_enum)]
    kind: SearchKind,

    #[clap(long, env = "SPOTICLI_DEVICE")]
    device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecentOptions {
    /// Only include plays after this local datetime (YYYYMMDD HH:MM)
    #[clap(short, long)]
    after: Option<String>,

    /// Number of tracks to display
    #[clap(short, long, default_value_t = 25, value_parser = clap::value_parser!(u8).range(1..=50))]
    limit: u8,

    #[clap(long, env = "SPOTICLI_DEVICE")]
    device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SpaOptions {
    /// Spotify playlist URL
    url: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AtqOptions {
    /// Spotify track, album, or playlist URL
    url: String,

    #[clap(long, env = "SPOTICLI_DEVICE")]
    device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Cfg => cli::generate_config().await,
        Command::Auth => cli::auth().await,
        Command::Play(opt) => cli::play(opt.url, opt.device).await,
        Command::Pause(opt) => cli::pause(opt.device).await,
        Command::Next(opt) => cli::next_track(opt.device).await,
        Command::Prev(opt) => cli::previous_track(opt.device).await,
        Command::Seek(opt) => cli::seek(opt.timestamp, opt.device).await,
        Command::Volup(opt) => cli::volume_up(opt.amount, opt.device).await,
        Command::Voldown(opt) => cli::volume_down(opt.amount, opt.device).await,
        Command::Now(opt) => cli::now_playing(opt.verbose, opt.url).await,
        Command::Shuffle(opt) => {
            cli::toggle_shuffle(opt.state == ShuffleState::On, opt.device).await
        }
        Command::Cp(opt) => {
            cli::create_playlist(opt.name, !opt.private, opt.collaborative, opt.description).await
        }
        Command::Search(opt) => cli::search(opt.query, opt.kind, opt.device).await,
        Command::Recent(opt) => cli::recently_played(opt.after, opt.limit, opt.device).await,
        Command::Rsa(opt) => cli::random_saved_album(opt.device).await,
        Command::Actp => cli::add_current_track_to_playlists().await,
        Command::Spa(opt) => cli::save_playlist_albums(opt.url).await,
        Command::Atq(opt) => cli::add_to_queue(opt.url, opt.device).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
