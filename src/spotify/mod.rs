//! # Spotify Integration Module
//!
//! Thin client for the Spotify Web API endpoints the CLI uses. Each submodule
//! covers one domain of the API and exposes plain async functions that take a
//! bearer token, issue a single request with `reqwest`, and deserialize the
//! JSON response into the types from [`crate::types`].
//!
//! ## Submodules
//!
//! - [`auth`] - OAuth authorization-code flow: browser hand-off, local
//!   callback server, code-for-token exchange
//! - [`player`] - playback state, devices, and every player mutation
//!   (play/pause/skip/seek/volume/shuffle/queue/transfer)
//! - [`library`] - saved albums (paginated reads, saves, contains-checks)
//!   and album track listings
//! - [`playlist`] - the user's playlists, playlist creation, playlist items
//!   and track additions
//! - [`search`] - catalog search plus the artist drill-down endpoints
//!
//! ## Error handling
//!
//! Functions return `Result<_, reqwest::Error>` and map non-2xx responses
//! through `error_for_status`. GET endpoints that feed pagination loops retry
//! on 502 Bad Gateway after a delay, matching the API's transient failure
//! mode; everything else propagates to the CLI layer, which prints a one-line
//! message and aborts the command.
//!
//! ## Device targeting
//!
//! Player mutations accept an optional device id which is appended as a
//! `device_id` query parameter. `None` targets the currently active device.

pub mod auth;
pub mod library;
pub mod player;
pub mod playlist;
pub mod search;
