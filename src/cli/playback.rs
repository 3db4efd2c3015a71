use std::time::Duration;

use colored::Colorize;
use tokio::time::sleep;

use crate::{
    error,
    session::{DeviceNeed, Session},
    spotify,
    types::CurrentPlayback,
    utils::{self, LinkKind},
    warning,
};

/// Fetches the flattened playback view, aborting on API failure. `None`
/// means nothing is playing anywhere.
pub(crate) async fn fetch_playback(token: &str) -> Option<CurrentPlayback> {
    match spotify::player::current_playback(token).await {
        Ok(Some(state)) => CurrentPlayback::from_state(&state),
        Ok(None) => None,
        Err(e) => error!("Failed to fetch playback state: {}", e),
    }
}

pub(crate) fn display_playback(playback: &CurrentPlayback) {
    println!(
        "Now playing: {} by {} from the {} {}",
        playback.track_name.magenta(),
        playback.artists.green(),
        playback.album_type,
        playback.album_name.blue()
    );
    println!(
        "Duration: {}, Released: {}",
        playback.duration, playback.release_date
    );
}

/// Waits for upstream state to settle, then shows the now-playing lines.
/// Used after every mutation that changes what is playing.
pub(crate) async fn wait_display_playback(session: &mut Session) {
    sleep(Duration::from_millis(500)).await;
    let token = session.token().await;
    match fetch_playback(&token).await {
        Some(playback) => display_playback(&playback),
        None => warning!("Nothing is currently playing!"),
    }
}

pub async fn play(url: Option<String>, device: Option<String>) {
    let mut session = Session::establish(device, DeviceNeed::Playback).await;
    let token = session.token().await;

    match url {
        Some(url) => {
            let parsed = match utils::check_url_format(&url) {
                Ok(parsed) => parsed,
                Err(e) => error!("{}", e),
            };
            let uri = parsed.to_uri();
            let (uris, context_uri) = match parsed.kind {
                LinkKind::Track => (Some(vec![uri]), None),
                _ => (None, Some(uri)),
            };
            if let Err(e) =
                spotify::player::start_playback(&token, session.device(), uris, context_uri).await
            {
                error!("Failed to start playback: {}", e);
            }
        }
        None => {
            let playback = fetch_playback(&token).await;
            let resuming_disallowed = playback
                .map(|p| p.resuming_disallowed)
                .unwrap_or(false);
            if !resuming_disallowed {
                if let Err(e) =
                    spotify::player::start_playback(&token, session.device(), None, None).await
                {
                    error!("Failed to resume playback: {}", e);
                }
                println!("Playback resumed.");
            }
        }
    }

    wait_display_playback(&mut session).await;
}

pub async fn pause(device: Option<String>) {
    let mut session = Session::establish(device, DeviceNeed::Playback).await;
    let token = session.token().await;

    let playback = fetch_playback(&token).await;
    let pausing_disallowed = playback.map(|p| p.pausing_disallowed).unwrap_or(true);
    if pausing_disallowed {
        println!("No current playback to pause.");
    } else {
        if let Err(e) = spotify::player::pause_playback(&token, session.device()).await {
            error!("Failed to pause playback: {}", e);
        }
        println!("Playback paused.");
    }
}

pub async fn next_track(device: Option<String>) {
    let mut session = Session::establish(device, DeviceNeed::Playback).await;
    let token = session.token().await;

    if let Err(e) = spotify::player::next_track(&token, session.device()).await {
        error!("Failed to skip to the next track: {}", e);
    }
    wait_display_playback(&mut session).await;
}

pub async fn previous_track(device: Option<String>) {
    let mut session = Session::establish(device, DeviceNeed::Playback).await;
    let token = session.token().await;

    let playback = fetch_playback(&token).await;
    let skip_disallowed = playback.map(|p| p.skip_prev_disallowed).unwrap_or(true);
    if skip_disallowed {
        println!("No previous tracks are available to skip to.");
    } else {
        if let Err(e) = spotify::player::previous_track(&token, session.device()).await {
            error!("Failed to skip to the previous track: {}", e);
        }
        wait_display_playback(&mut session).await;
    }
}

pub async fn seek(timestamp: String, device: Option<String>) {
    let position_ms = match utils::parse_timestamp(&timestamp) {
        Ok(ms) => ms,
        Err(e) => error!("{}", e),
    };

    let mut session = Session::establish(device, DeviceNeed::Playback).await;
    let token = session.token().await;
    if let Err(e) = spotify::player::seek(&token, position_ms, session.device()).await {
        error!("Failed to seek: {}", e);
    }
}

pub async fn toggle_shuffle(on: bool, device: Option<String>) {
    let mut session = Session::establish(device, DeviceNeed::Playback).await;
    let token = session.token().await;

    if let Err(e) = spotify::player::set_shuffle(&token, on, session.device()).await {
        error!("Failed to toggle shuffle: {}", e);
    }

    let state = if on {
        "on".green().to_string()
    } else {
        "off".red().to_string()
    };
    println!("Shuffle toggled {}.", state);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UrlChoice {
    /// Show the track URL
    T,
    /// Show the album URL
    A,
}

pub async fn now_playing(verbose: bool, url: UrlChoice) {
    let mut session = Session::establish(None, DeviceNeed::None).await;
    let token = session.token().await;

    let Some(playback) = fetch_playback(&token).await else {
        warning!("Nothing is currently playing!");
        return;
    };
    display_playback(&playback);

    if !verbose {
        return;
    }

    let track_id = playback
        .track_id
        .clone()
        .unwrap_or_else(|| utils::uri_id(&playback.track_uri).to_string());
    match spotify::player::audio_features(&token, &track_id).await {
        Ok(features) => {
            println!("BPM: {}", features.tempo);
            println!("Time signature: 4/{}", features.time_signature);
        }
        Err(e) => warning!("Failed to fetch audio features: {}", e),
    }

    match url {
        UrlChoice::T => {
            if let Some(track_url) = &playback.track_url {
                println!("Track URL: {}", track_url.magenta());
            }
        }
        UrlChoice::A => {
            if let Some(album_url) = &playback.album_url {
                println!("Album URL: {}", album_url.blue());
            }
        }
    }
}
