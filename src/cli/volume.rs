use crate::{
    cli::playback::fetch_playback,
    error,
    session::{DeviceNeed, Session},
    spotify, warning,
};

pub async fn volume_up(amount: u8, device: Option<String>) {
    change_volume(amount as i16, device).await;
}

pub async fn volume_down(amount: u8, device: Option<String>) {
    change_volume(-(amount as i16), device).await;
}

async fn change_volume(delta: i16, device: Option<String>) {
    let mut session = Session::establish(device, DeviceNeed::Playback).await;
    let token = session.token().await;

    let Some(playback) = fetch_playback(&token).await else {
        warning!("Nothing is currently playing!");
        return;
    };
    let Some(previous) = playback.volume else {
        warning!("The active device does not report a volume.");
        return;
    };

    let new_volume = (previous as i16 + delta).clamp(0, 100) as u8;
    if let Err(e) = spotify::player::set_volume(&token, new_volume, session.device()).await {
        error!("Failed to set the volume: {}", e);
    }
    println!("New volume: {}", new_volume);
}
