use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config::{self, Credentials},
    error,
    management::TokenManager,
    server::start_callback_server,
    success,
    types::{AuthFlowState, Token},
    warning,
};

/// Runs the complete OAuth authorization-code flow.
///
/// Starts a local callback server on the address derived from the configured
/// redirect URI, opens the authorization URL in the user's browser, waits for
/// the callback to exchange the code for a token, and persists the token for
/// future commands.
///
/// Browser launch failures degrade to printing the URL for manual use; a
/// failed or timed-out authorization terminates the command.
pub async fn auth(credentials: Credentials) {
    let shared_state: Arc<Mutex<Option<AuthFlowState>>> = Arc::new(Mutex::new(None));

    // start the callback server before the browser can hit it
    let server_state = Arc::clone(&shared_state);
    let server_credentials = credentials.clone();
    tokio::spawn(async move {
        start_callback_server(server_state, server_credentials).await;
    });

    let auth_url = format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
        auth_url = config::SPOTIFY_AUTH_URL,
        client_id = &credentials.client_id,
        redirect_uri = &credentials.redirect_uri,
        scope = config::SPOTIFY_SCOPE,
    );

    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthFlowState {
            credentials: credentials.clone(),
            token: None,
        });
    }

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(t.clone(), credentials);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Polls the shared state for a completed token, giving the user 60 seconds
/// to finish the browser authorization.
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthFlowState>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(flow) = lock.as_ref() {
            if let Some(token) = &flow.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for an access token.
///
/// Final step of the authorization-code flow; authenticates with the client
/// id and secret from the config file.
pub async fn exchange_code(
    code: &str,
    credentials: &Credentials,
) -> Result<Token, reqwest::Error> {
    let client = Client::new();
    let res = client
        .post(config::SPOTIFY_TOKEN_URL)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &credentials.redirect_uri),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
