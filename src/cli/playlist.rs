use colored::Colorize;
use tabled::Table;

use crate::{
    cli::playback::fetch_playback,
    error, prompt,
    session::{DeviceNeed, Session},
    spotify, success,
    types::{CreatePlaylistRequest, PlaylistTableRow},
    warning,
};

// the playlist table stays readable with the most recent twenty
const PLAYLIST_LIMIT: usize = 20;

pub async fn create_playlist(name: String, public: bool, collaborative: bool, description: String) {
    if public && collaborative {
        error!("Collaborative playlists can only be private.");
    }

    let mut session = Session::establish(None, DeviceNeed::None).await;
    let token = session.token().await;

    let request = CreatePlaylistRequest {
        name: name.clone(),
        description,
        public,
        collaborative,
    };
    if let Err(e) = spotify::playlist::create(&token, &session.user, &request).await {
        error!("Failed to create the playlist: {}", e);
    }
    success!("Playlist '{}' created successfully!", name);
}

pub async fn add_current_track_to_playlists() {
    let mut session = Session::establish(None, DeviceNeed::None).await;
    let token = session.token().await;

    let Some(playback) = fetch_playback(&token).await else {
        warning!("Nothing is currently playing!");
        return;
    };
    crate::cli::playback::display_playback(&playback);

    let playlists = match spotify::playlist::current_user_playlists(&token, PLAYLIST_LIMIT).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists: {}", e),
    };
    if playlists.is_empty() {
        warning!("No playlists were found.");
        return;
    }

    let rows: Vec<PlaylistTableRow> = playlists
        .iter()
        .enumerate()
        .map(|(index, playlist)| PlaylistTableRow {
            index,
            name: playlist.name.clone(),
            tracks: playlist.tracks.as_ref().map(|t| t.total).unwrap_or(0),
        })
        .collect();
    println!("{}", Table::new(rows));

    let indices = prompt::prompt_indices(
        "Enter the indices of the playlists to add the track to separated by commas",
        playlists.len(),
    );

    let track_uri = vec![playback.track_uri.clone()];
    for index in indices {
        if let Err(e) = spotify::playlist::add_tracks(&token, &playlists[index].id, &track_uri).await
        {
            error!("Failed to add the track to '{}': {}", playlists[index].name, e);
        }
    }
    println!(
        "{} {}",
        playback.track_name.magenta(),
        "was successfully added to all specified playlists!".green()
    );
}
