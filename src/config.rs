//! Credentials and configuration handling.
//!
//! Credentials live in an INI file at the platform user-config directory
//! (`spoticli/spoticli.ini`) under an `[auth]` section with four keys:
//! client id, client secret, redirect URI and user id. Individual values can
//! be overridden through environment variables, and a pre-cached token blob
//! can be injected via `CACHED_TOKEN_INFO` to skip the config file entirely.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. The INI config file written by `spoticli cfg`
//! 3. There is no third option: missing credentials abort the command.

use std::{env, path::PathBuf};

use ini::Ini;

/// Base URL of the Spotify Web API.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// OAuth authorization endpoint users are redirected to.
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";

/// OAuth token exchange and refresh endpoint.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Scopes requested during authorization. Every command surface the CLI
/// offers is covered; trimming this list breaks the corresponding commands.
pub const SPOTIFY_SCOPE: &str = "user-modify-playback-state \
user-read-playback-state \
user-library-read \
user-library-modify \
playlist-read-private \
playlist-read-collaborative \
playlist-modify-public \
playlist-modify-private \
user-read-recently-played";

const CONFIG_SECTION: &str = "auth";

/// Loads environment variables from an optional `.env` file in the local
/// data directory (`spoticli/.env`). A missing file is not an error; the
/// file only exists for users who prefer env-style configuration.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spoticli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// The four credential strings every API session needs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub user_id: String,
}

impl Credentials {
    /// Loads credentials from the environment and the INI config file.
    ///
    /// Environment variables win over config file values, so a user can
    /// override a single key without rewriting the file. Returns an error
    /// when neither source provides a key; the caller turns that into the
    /// "run spoticli cfg" hint.
    pub fn load() -> Result<Self, String> {
        let file = match Ini::load_from_file(config_file()) {
            Ok(ini) => Some(ini),
            Err(_) => None,
        };

        let get = |env_key: &str, ini_key: &str| -> Result<String, String> {
            if let Ok(val) = env::var(env_key) {
                return Ok(val);
            }
            file.as_ref()
                .and_then(|ini| ini.section(Some(CONFIG_SECTION)))
                .and_then(|section| section.get(ini_key))
                .map(|v| v.to_string())
                .ok_or_else(|| format!("missing credential {}", ini_key))
        };

        Ok(Credentials {
            client_id: get("SPOTIFY_CLIENT_ID", "spotify_client_id")?,
            client_secret: get("SPOTIFY_CLIENT_SECRET", "spotify_client_secret")?,
            redirect_uri: get("SPOTIFY_REDIRECT_URI", "spotify_redirect_uri")?,
            user_id: get("SPOTIFY_USER_ID", "spotify_user_id")?,
        })
    }

    /// Writes the credentials to the INI config file, creating the config
    /// directory when needed. Used by the `cfg` command.
    pub async fn persist(&self) -> Result<(), String> {
        let path = config_file();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let mut ini = Ini::new();
        ini.with_section(Some(CONFIG_SECTION))
            .set("spotify_client_id", &self.client_id)
            .set("spotify_client_secret", &self.client_secret)
            .set("spotify_redirect_uri", &self.redirect_uri)
            .set("spotify_user_id", &self.user_id);

        let mut buf = Vec::new();
        ini.write_to(&mut buf).map_err(|e| e.to_string())?;
        async_fs::write(path, buf).await.map_err(|e| e.to_string())
    }
}

/// Path of the INI credentials file.
pub fn config_file() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spoticli/spoticli.ini");
    path
}

/// Pre-cached token blob from the environment, if any.
///
/// When set, the session skips the on-disk token cache and uses this JSON
/// directly. Primarily for CI and scripted use.
pub fn cached_token_info() -> Option<String> {
    env::var("CACHED_TOKEN_INFO").ok()
}

/// Derives the local socket address the OAuth callback server binds to from
/// the configured redirect URI.
///
/// `http://localhost:8888/callback` becomes `127.0.0.1:8888`. A redirect URI
/// without an explicit port binds to port 80.
pub fn callback_bind_addr(redirect_uri: &str) -> Result<String, String> {
    let rest = redirect_uri
        .strip_prefix("http://")
        .or_else(|| redirect_uri.strip_prefix("https://"))
        .ok_or_else(|| format!("redirect URI has no http scheme: {}", redirect_uri))?;

    let authority = rest.split('/').next().unwrap_or_default();
    if authority.is_empty() {
        return Err(format!("redirect URI has no host: {}", redirect_uri));
    }

    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host, port),
        None => (authority, "80"),
    };
    port.parse::<u16>()
        .map_err(|_| format!("redirect URI has an invalid port: {}", redirect_uri))?;

    // The browser resolves localhost; the listener needs a concrete address.
    let host = if host == "localhost" { "127.0.0.1" } else { host };
    Ok(format!("{}:{}", host, port))
}
