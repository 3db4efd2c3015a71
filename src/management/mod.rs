//! High-level management of locally persisted state.
//!
//! The only state the CLI owns itself is the cached OAuth token; everything
//! else is fetched fresh from the API on every invocation.

mod auth;

pub use auth::TokenManager;
