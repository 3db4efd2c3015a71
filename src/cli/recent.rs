use tabled::Table;

use crate::{
    cli::{playback::wait_display_playback, queue::add_album_to_queue},
    error, prompt,
    prompt::{PlayOrQueue, TrackOrAlbum},
    session::{DeviceNeed, Session},
    spotify, success,
    types::{CreatePlaylistRequest, PlayHistoryItem, RecentTableRow},
    utils, warning,
};

pub async fn recently_played(after: Option<String>, limit: u8, device: Option<String>) {
    let after_ms = match after {
        Some(datetime) => match utils::parse_datetime(&datetime) {
            Ok(ms) => Some(ms),
            Err(e) => error!("{}", e),
        },
        None => None,
    };

    // prompts before playing; an activated device must stay silent meanwhile
    let mut session = Session::establish(device, DeviceNeed::Registered).await;
    let token = session.token().await;

    let recent = match spotify::player::recently_played(&token, limit, after_ms).await {
        Ok(res) => res.items,
        Err(e) => error!("Failed to fetch recently played tracks: {}", e),
    };
    if recent.is_empty() {
        warning!("No recently played tracks were found.");
        return;
    }
    display_recent_table(&recent);

    match prompt::prompt_play_or_queue("Play, queue, or create a playlist from a range?", true) {
        PlayOrQueue::CreatePlaylist => {
            create_playlist_from_range(&token, &session.user, &recent).await;
        }
        task => {
            let index = prompt::prompt_index("Enter the index of the track", recent.len());
            let choice = prompt::prompt_track_or_album("Track or associated album?");
            let item = &recent[index];

            match (task, choice) {
                (PlayOrQueue::Queue, TrackOrAlbum::Track) => {
                    if let Err(e) =
                        spotify::player::add_to_queue(&token, &item.track.uri, session.device())
                            .await
                    {
                        error!("Failed to add the track to the queue: {}", e);
                    }
                    success!("Track successfully added to the queue.");
                }
                (PlayOrQueue::Queue, TrackOrAlbum::Album) => {
                    add_album_to_queue(&token, &item.track.album.uri, session.device()).await;
                }
                (_, TrackOrAlbum::Track) => {
                    if let Err(e) = spotify::player::start_playback(
                        &token,
                        session.device(),
                        Some(vec![item.track.uri.clone()]),
                        None,
                    )
                    .await
                    {
                        error!("Failed to start playback: {}", e);
                    }
                    wait_display_playback(&mut session).await;
                }
                (_, TrackOrAlbum::Album) => {
                    if let Err(e) = spotify::player::start_playback(
                        &token,
                        session.device(),
                        None,
                        Some(item.track.album.uri.clone()),
                    )
                    .await
                    {
                        error!("Failed to start playback: {}", e);
                    }
                    wait_display_playback(&mut session).await;
                }
            }
        }
    }
}

fn display_recent_table(recent: &[PlayHistoryItem]) {
    let rows: Vec<RecentTableRow> = recent
        .iter()
        .enumerate()
        .map(|(index, item)| RecentTableRow {
            index,
            track: item.track.name.clone(),
            album_type: item.track.album.album_type.clone(),
            album: item.track.album.name.clone(),
            played_at: item.played_at.clone(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

/// Turns an inclusive index range of the listed tracks into a new playlist.
async fn create_playlist_from_range(token: &str, user: &str, recent: &[PlayHistoryItem]) {
    let (start, end) = prompt::prompt_index_range(
        "Enter the indices of the tracks to add to the playlist separated by commas",
        recent.len(),
    );
    let name = prompt::prompt_line("Enter the playlist name");

    let request = CreatePlaylistRequest {
        name: name.clone(),
        description: String::new(),
        public: true,
        collaborative: false,
    };
    let playlist = match spotify::playlist::create(token, user, &request).await {
        Ok(playlist) => playlist,
        Err(e) => error!("Failed to create the playlist: {}", e),
    };

    let track_uris: Vec<String> = recent[start..=end]
        .iter()
        .map(|item| item.track.uri.clone())
        .collect();
    if let Err(e) = spotify::playlist::add_tracks(token, &playlist.id, &track_uris).await {
        error!("Failed to add tracks to the playlist: {}", e);
    }
    success!("Playlist '{}' created successfully!", name);
}
