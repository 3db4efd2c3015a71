//! # CLI Module
//!
//! User-facing command implementations. Each function here backs exactly one
//! subcommand of the binary: it establishes a [`crate::session::Session`],
//! issues the API calls through [`crate::spotify`], and renders the result
//! as colored lines or `tabled` tables, prompting where a command is
//! interactive.
//!
//! ## Command map
//!
//! - [`auth`] / [`generate_config`] - authorization flow and `cfg`
//! - [`play`], [`pause`], [`next_track`], [`previous_track`], [`seek`],
//!   [`toggle_shuffle`], [`now_playing`] - playback control
//! - [`volume_up`] / [`volume_down`] - relative volume changes
//! - [`add_to_queue`] - `atq`, queue a track, album, or playlist by URL
//! - [`recently_played`] - `recent`, table plus play/queue/playlist actions
//! - [`random_saved_album`] - `rsa`, random pick from the saved albums
//! - [`save_playlist_albums`] - `spa`, save a playlist's albums
//! - [`create_playlist`] / [`add_current_track_to_playlists`] - `cp`, `actp`
//! - [`search`] - typed catalog search with interactive follow-ups
//!
//! Errors never propagate out of this layer: the command prints a one-line
//! message through the crate's output macros and aborts.

mod auth;
mod cfg;
mod library;
mod playback;
mod playlist;
mod queue;
mod recent;
mod search;
mod volume;

pub use auth::auth;
pub use cfg::generate_config;
pub use library::random_saved_album;
pub use library::save_playlist_albums;
pub use playback::UrlChoice;
pub use playback::next_track;
pub use playback::now_playing;
pub use playback::pause;
pub use playback::play;
pub use playback::previous_track;
pub use playback::seek;
pub use playback::toggle_shuffle;
pub use playlist::add_current_track_to_playlists;
pub use playlist::create_playlist;
pub use queue::add_to_queue;
pub use recent::recently_played;
pub use search::{SearchKind, search};
pub use volume::{volume_down, volume_up};
