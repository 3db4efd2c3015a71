//! # API Module
//!
//! HTTP endpoints for the temporary local web server that receives the OAuth
//! redirect during `spoticli auth`.
//!
//! - [`callback`] - receives the authorization code from Spotify's redirect
//!   and exchanges it for an access token
//! - [`health`] - liveness endpoint, handy when debugging redirect URIs
//!
//! Built on [Axum](https://docs.rs/axum); the routes are wired up in
//! [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
