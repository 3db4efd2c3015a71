use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::json;
use tokio::time::sleep;

use crate::{
    config,
    types::{AudioFeatures, Device, DevicesResponse, PlaybackState, RecentlyPlayedResponse},
};

fn with_device(req: RequestBuilder, device: Option<&str>) -> RequestBuilder {
    match device {
        Some(id) => req.query(&[("device_id", id)]),
        None => req,
    }
}

/// Retrieves the current playback state.
///
/// Returns `Ok(None)` when nothing is playing anywhere; the API signals that
/// with 204 No Content instead of an empty state object.
pub async fn current_playback(token: &str) -> Result<Option<PlaybackState>, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(format!("{}/me/player", config::SPOTIFY_API_URL))
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    if response.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let state = response.json::<PlaybackState>().await?;
    Ok(Some(state))
}

/// Lists the devices registered to the user's account.
///
/// Retries on 502 Bad Gateway with a delay; other errors propagate.
pub async fn devices(token: &str) -> Result<Vec<Device>, reqwest::Error> {
    loop {
        let client = Client::new();
        let response = client
            .get(format!("{}/me/player/devices", config::SPOTIFY_API_URL))
            .bearer_auth(token)
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<DevicesResponse>().await?;
        return Ok(res.devices);
    }
}

/// Starts or resumes playback.
///
/// `uris` plays a fixed list of tracks, `context_uri` plays inside an album
/// or playlist context; with neither, the active track resumes.
pub async fn start_playback(
    token: &str,
    device: Option<&str>,
    uris: Option<Vec<String>>,
    context_uri: Option<String>,
) -> Result<(), reqwest::Error> {
    let body = match (&uris, &context_uri) {
        (Some(uris), _) => json!({ "uris": uris }),
        (None, Some(context)) => json!({ "context_uri": context }),
        (None, None) => json!({}),
    };

    let client = Client::new();
    let req = client
        .put(format!("{}/me/player/play", config::SPOTIFY_API_URL))
        .bearer_auth(token)
        .json(&body);
    with_device(req, device).send().await?.error_for_status()?;
    Ok(())
}

pub async fn pause_playback(token: &str, device: Option<&str>) -> Result<(), reqwest::Error> {
    let client = Client::new();
    let req = client
        .put(format!("{}/me/player/pause", config::SPOTIFY_API_URL))
        .bearer_auth(token);
    with_device(req, device).send().await?.error_for_status()?;
    Ok(())
}

pub async fn next_track(token: &str, device: Option<&str>) -> Result<(), reqwest::Error> {
    let client = Client::new();
    let req = client
        .post(format!("{}/me/player/next", config::SPOTIFY_API_URL))
        .bearer_auth(token);
    with_device(req, device).send().await?.error_for_status()?;
    Ok(())
}

pub async fn previous_track(token: &str, device: Option<&str>) -> Result<(), reqwest::Error> {
    let client = Client::new();
    let req = client
        .post(format!("{}/me/player/previous", config::SPOTIFY_API_URL))
        .bearer_auth(token);
    with_device(req, device).send().await?.error_for_status()?;
    Ok(())
}

pub async fn seek(
    token: &str,
    position_ms: u64,
    device: Option<&str>,
) -> Result<(), reqwest::Error> {
    let client = Client::new();
    let req = client
        .put(format!("{}/me/player/seek", config::SPOTIFY_API_URL))
        .bearer_auth(token)
        .query(&[("position_ms", position_ms.to_string())]);
    with_device(req, device).send().await?.error_for_status()?;
    Ok(())
}

pub async fn set_volume(
    token: &str,
    volume_percent: u8,
    device: Option<&str>,
) -> Result<(), reqwest::Error> {
    let client = Client::new();
    let req = client
        .put(format!("{}/me/player/volume", config::SPOTIFY_API_URL))
        .bearer_auth(token)
        .query(&[("volume_percent", volume_percent.to_string())]);
    with_device(req, device).send().await?.error_for_status()?;
    Ok(())
}

pub async fn set_shuffle(
    token: &str,
    state: bool,
    device: Option<&str>,
) -> Result<(), reqwest::Error> {
    let client = Client::new();
    let req = client
        .put(format!("{}/me/player/shuffle", config::SPOTIFY_API_URL))
        .bearer_auth(token)
        .query(&[("state", state.to_string())]);
    with_device(req, device).send().await?.error_for_status()?;
    Ok(())
}

/// Transfers playback to another device. `play: true` forces the target to
/// start playing, which is the only reliable way to activate an idle device.
pub async fn transfer_playback(
    token: &str,
    device_id: &str,
    play: bool,
) -> Result<(), reqwest::Error> {
    let client = Client::new();
    client
        .put(format!("{}/me/player", config::SPOTIFY_API_URL))
        .bearer_auth(token)
        .json(&json!({ "device_ids": [device_id], "play": play }))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

pub async fn add_to_queue(
    token: &str,
    uri: &str,
    device: Option<&str>,
) -> Result<(), reqwest::Error> {
    let client = Client::new();
    let req = client
        .post(format!("{}/me/player/queue", config::SPOTIFY_API_URL))
        .bearer_auth(token)
        .query(&[("uri", uri)]);
    with_device(req, device).send().await?.error_for_status()?;
    Ok(())
}

/// Retrieves the user's recently played tracks.
///
/// `after` filters to plays after the given epoch-millisecond timestamp.
/// Retries on 502 like the other list endpoints.
pub async fn recently_played(
    token: &str,
    limit: u8,
    after: Option<i64>,
) -> Result<RecentlyPlayedResponse, reqwest::Error> {
    loop {
        let mut api_url = format!(
            "{uri}/me/player/recently-played?limit={limit}",
            uri = config::SPOTIFY_API_URL,
            limit = limit
        );
        if let Some(after_ms) = after {
            api_url.push_str(&format!("&after={}", after_ms));
        }

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        return response.json::<RecentlyPlayedResponse>().await;
    }
}

pub async fn audio_features(token: &str, track_id: &str) -> Result<AudioFeatures, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(format!(
            "{}/audio-features/{}",
            config::SPOTIFY_API_URL,
            track_id
        ))
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AudioFeatures>().await
}
