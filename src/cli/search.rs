use colored::Colorize;
use tabled::Table;

use crate::{
    cli::{
        playback::wait_display_playback,
        queue::{add_album_to_queue, add_playlist_to_queue},
    },
    error, prompt,
    prompt::{PlayOrQueue, TrackOrAlbum},
    session::{DeviceNeed, Session},
    spotify::{self, search::SEARCH_LIMIT},
    success,
    types::{
        Album, AlbumSearchTableRow, ArtistAlbumTableRow, ArtistSearchTableRow, FullArtist,
        Playlist, PlaylistSearchTableRow, TopTrackTableRow, Track, TrackSearchTableRow,
    },
    utils::{self, TRUNCATE_LEN},
};

/// The catalog types the search command can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchKind {
    Album,
    Artist,
    Playlist,
    Track,
}

impl SearchKind {
    fn as_str(self) -> &'static str {
        match self {
            SearchKind::Album => "album",
            SearchKind::Artist => "artist",
            SearchKind::Playlist => "playlist",
            SearchKind::Track => "track",
        }
    }
}

pub async fn search(query: String, kind: SearchKind, device: Option<String>) {
    // prompts before playing; an activated device must stay silent meanwhile
    let mut session = Session::establish(device, DeviceNeed::Registered).await;
    let token = session.token().await;

    let response = match spotify::search::search(&token, &query, kind.as_str(), SEARCH_LIMIT).await
    {
        Ok(response) => response,
        Err(e) => error!("Search failed: {}", e),
    };

    match kind {
        SearchKind::Album => {
            let albums = response.albums.map(|p| p.items).unwrap_or_default();
            album_results(&mut session, &token, albums).await;
        }
        SearchKind::Artist => {
            let artists = response.artists.map(|p| p.items).unwrap_or_default();
            artist_results(&mut session, &token, artists).await;
        }
        SearchKind::Playlist => {
            let playlists = response.playlists.map(|p| p.items).unwrap_or_default();
            playlist_results(&mut session, &token, playlists).await;
        }
        SearchKind::Track => {
            let tracks = response.tracks.map(|p| p.items).unwrap_or_default();
            track_results(&mut session, &token, tracks).await;
        }
    }
}

async fn play_tracks(session: &mut Session, token: &str, uris: Vec<String>) {
    if let Err(e) =
        spotify::player::start_playback(token, session.device(), Some(uris), None).await
    {
        error!("Failed to start playback: {}", e);
    }
    wait_display_playback(session).await;
}

async fn play_context(session: &mut Session, token: &str, context_uri: String) {
    if let Err(e) =
        spotify::player::start_playback(token, session.device(), None, Some(context_uri)).await
    {
        error!("Failed to start playback: {}", e);
    }
    wait_display_playback(session).await;
}

async fn album_results(session: &mut Session, token: &str, albums: Vec<Album>) {
    if albums.is_empty() {
        error!("No results were found.");
    }

    let rows: Vec<AlbumSearchTableRow> = albums
        .iter()
        .enumerate()
        .map(|(index, album)| AlbumSearchTableRow {
            index,
            artists: utils::truncate(&utils::artist_names(&album.artists), TRUNCATE_LEN),
            album: album.name.clone(),
            release_date: album.release_date.clone().unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows));

    let index = prompt::prompt_index("Enter the index of the album", albums.len());
    match prompt::prompt_play_or_queue("Play now or add to queue?", false) {
        PlayOrQueue::Queue => add_album_to_queue(token, &albums[index].uri, session.device()).await,
        _ => play_context(session, token, albums[index].uri.clone()).await,
    }
}

async fn artist_results(session: &mut Session, token: &str, artists: Vec<FullArtist>) {
    if artists.is_empty() {
        error!("No results were found.");
    }

    let rows: Vec<ArtistSearchTableRow> = artists
        .iter()
        .enumerate()
        .map(|(index, artist)| ArtistSearchTableRow {
            index,
            artist: utils::truncate(&artist.name, TRUNCATE_LEN),
        })
        .collect();
    println!("{}", Table::new(rows));

    let index = prompt::prompt_index("Enter the index of the artist", artists.len());
    let artist = &artists[index];

    match prompt::prompt_track_or_album("View most popular tracks or artist albums?") {
        TrackOrAlbum::Album => artist_album_results(session, token, &artist.id).await,
        TrackOrAlbum::Track => artist_top_track_results(session, token, &artist.id).await,
    }
}

async fn artist_album_results(session: &mut Session, token: &str, artist_id: &str) {
    let albums = match spotify::search::artist_albums(token, artist_id).await {
        Ok(response) => response.items,
        Err(e) => error!("Failed to fetch the artist's albums: {}", e),
    };
    if albums.is_empty() {
        error!("The artist has no albums.");
    }

    let rows: Vec<ArtistAlbumTableRow> = albums
        .iter()
        .enumerate()
        .map(|(index, album)| ArtistAlbumTableRow {
            index,
            album: utils::truncate(&album.name, TRUNCATE_LEN),
            kind: album.album_type.clone(),
            release_date: album.release_date.clone().unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows));

    let index = prompt::prompt_index("Enter the index of the album", albums.len());
    match prompt::prompt_play_or_queue("Play now or add to queue?", false) {
        PlayOrQueue::Queue => add_album_to_queue(token, &albums[index].uri, session.device()).await,
        _ => play_context(session, token, albums[index].uri.clone()).await,
    }
}

async fn artist_top_track_results(session: &mut Session, token: &str, artist_id: &str) {
    let tracks = match spotify::search::artist_top_tracks(token, artist_id).await {
        Ok(response) => response.tracks,
        Err(e) => error!("Failed to fetch the artist's top tracks: {}", e),
    };
    if tracks.is_empty() {
        error!("The artist has no top tracks.");
    }

    let rows: Vec<TopTrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(index, track)| TopTrackTableRow {
            index,
            track: utils::truncate(&track.name, TRUNCATE_LEN),
            duration: utils::convert_ms(track.duration_ms),
        })
        .collect();
    println!("{}", Table::new(rows));

    let index = prompt::prompt_index("Enter the index of the track", tracks.len());
    match prompt::prompt_play_or_queue("Play now or add to queue?", false) {
        PlayOrQueue::Queue => {
            if let Err(e) =
                spotify::player::add_to_queue(token, &tracks[index].uri, session.device()).await
            {
                error!("Failed to add the track to the queue: {}", e);
            }
            success!("Successfully added to queue!");
        }
        _ => play_tracks(session, token, vec![tracks[index].uri.clone()]).await,
    }
}

async fn playlist_results(session: &mut Session, token: &str, playlists: Vec<Playlist>) {
    if playlists.is_empty() {
        error!("No results were found.");
    }

    let rows: Vec<PlaylistSearchTableRow> = playlists
        .iter()
        .enumerate()
        .map(|(index, playlist)| PlaylistSearchTableRow {
            index,
            name: utils::truncate(&playlist.name, TRUNCATE_LEN),
            creator: playlist
                .owner
                .as_ref()
                .and_then(|o| o.display_name.clone())
                .unwrap_or_default(),
            description: utils::truncate(
                playlist.description.as_deref().unwrap_or_default(),
                TRUNCATE_LEN,
            ),
            tracks: playlist.tracks.as_ref().map(|t| t.total).unwrap_or(0),
        })
        .collect();
    println!("{}", Table::new(rows));

    let index = prompt::prompt_index("Enter the index of the playlist", playlists.len());
    let playlist = &playlists[index];
    match prompt::prompt_play_or_queue("Play now or add to queue?", false) {
        PlayOrQueue::Queue => {
            let total = playlist.tracks.as_ref().map(|t| t.total).unwrap_or(0);
            let confirmed = prompt::prompt_confirm(&format!(
                "Are you sure you want to add all {} tracks?",
                total
            ));
            if confirmed {
                add_playlist_to_queue(token, &playlist.uri, session.device()).await;
            } else {
                println!("{}", "Operation aborted.".red());
            }
        }
        _ => play_context(session, token, playlist.uri.clone()).await,
    }
}

async fn track_results(session: &mut Session, token: &str, tracks: Vec<Track>) {
    if tracks.is_empty() {
        error!("No results were found.");
    }

    let rows: Vec<TrackSearchTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(index, track)| TrackSearchTableRow {
            index,
            track: track.name.clone(),
            duration: utils::convert_ms(track.duration_ms),
            artists: utils::truncate(&utils::artist_names(&track.artists), TRUNCATE_LEN),
            album: track.album.name.clone(),
            release_date: track.album.release_date.clone().unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows));

    let index = prompt::prompt_index("Enter the index of the track", tracks.len());
    match prompt::prompt_play_or_queue("Play now or add to queue?", false) {
        PlayOrQueue::Queue => {
            if let Err(e) =
                spotify::player::add_to_queue(token, &tracks[index].uri, session.device()).await
            {
                error!("Failed to add the track to the queue: {}", e);
            }
            success!("Track added to queue successfully!");
        }
        _ => play_tracks(session, token, vec![tracks[index].uri.clone()]).await,
    }
}
