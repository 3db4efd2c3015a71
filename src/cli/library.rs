use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tabled::Table;

use crate::{
    cli::{playback::wait_display_playback, queue::add_album_to_queue},
    error, info, prompt,
    prompt::PlayOrQueue,
    session::{DeviceNeed, Session},
    spotify::{self, library::SAVED_ALBUMS_PAGE, playlist::PLAYLIST_ITEMS_PAGE},
    success,
    types::{Album, SavedAlbumItem, UnsavedAlbumTableRow},
    utils::{self, LinkKind, TRUNCATE_LEN},
    warning,
};

// narrows the playlist-items response to the album fields needed below
const ALBUM_FIELDS: &str =
    "items(track(album(album_type,artists(name),name,total_tracks,uri,release_date)))";

const SPA_TRUNCATE_LEN: usize = 40;

pub async fn random_saved_album(device: Option<String>) {
    // prompts before playing; an activated device must stay silent meanwhile
    let mut session = Session::establish(device, DeviceNeed::Registered).await;
    let token = session.token().await;

    let saved = fetch_all_saved_albums(&token).await;
    if saved.is_empty() {
        error!("No saved albums were found in the library.");
    }

    let mut rng = rand::rng();
    let selected = loop {
        let index = rng.random_range(0..saved.len());
        let album = &saved[index].album;
        println!(
            "Selected album: {} by {}.",
            album.name.blue(),
            utils::truncate(&utils::artist_names(&album.artists), TRUNCATE_LEN).green()
        );
        if prompt::prompt_confirm("Select this album?") {
            break album;
        }
    };

    match prompt::prompt_play_or_queue("Play now or add to queue?", false) {
        PlayOrQueue::Queue => add_album_to_queue(&token, &selected.uri, session.device()).await,
        _ => {
            if let Err(e) = spotify::player::start_playback(
                &token,
                session.device(),
                None,
                Some(selected.uri.clone()),
            )
            .await
            {
                error!("Failed to start playback: {}", e);
            }
            wait_display_playback(&mut session).await;
        }
    }
}

/// Pages through the whole saved-albums library. The endpoint caps pages at
/// fifty items, so large libraries take a while.
async fn fetch_all_saved_albums(token: &str) -> Vec<SavedAlbumItem> {
    info!("Retrieving saved albums. This may take a few moments...");
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching saved albums...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut saved = Vec::new();
    let mut offset = 0;
    loop {
        let page = match spotify::library::saved_albums_page(token, SAVED_ALBUMS_PAGE, offset).await
        {
            Ok(page) => page,
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch saved albums: {}", e);
            }
        };

        let fetched = page.len();
        saved.extend(page);
        pb.set_message(format!("Fetched {} albums...", saved.len()));

        if fetched < SAVED_ALBUMS_PAGE {
            break;
        }
        offset += SAVED_ALBUMS_PAGE;
    }

    pb.finish_and_clear();
    saved
}

pub async fn save_playlist_albums(url: String) {
    let parsed = match utils::check_url_format(&url) {
        Ok(parsed) => parsed,
        Err(e) => error!("{}", e),
    };
    if parsed.kind != LinkKind::Playlist {
        error!("An invalid URL was provided.");
    }

    let mut session = Session::establish(None, DeviceNeed::None).await;
    let token = session.token().await;

    info!("Retrieving all albums and EPs from the playlist...");
    let albums = fetch_playlist_albums(&token, &parsed.id).await;
    let unsaved = filter_unsaved(&token, albums).await;
    if unsaved.is_empty() {
        warning!("Every album in the playlist is already saved.");
        return;
    }
    display_unsaved_table(&unsaved);

    let ids: Vec<String> = unsaved
        .iter()
        .map(|album| utils::uri_id(&album.uri).to_string())
        .collect();
    let selection = if prompt::prompt_confirm("Add all albums to user library?") {
        ids
    } else {
        let indices = prompt::prompt_indices(
            "Enter the indices of albums to add (separated by a comma)",
            ids.len(),
        );
        indices.into_iter().map(|i| ids[i].clone()).collect()
    };

    if let Err(e) = spotify::library::save_albums(&token, &selection).await {
        error!("Failed to save albums: {}", e);
    }
    success!("Albums successfully added to user library!");
}

/// Collects the albums and multi-track EPs a playlist's tracks belong to.
async fn fetch_playlist_albums(token: &str, playlist_id: &str) -> Vec<Album> {
    let mut albums = Vec::new();
    let mut offset = 0;
    loop {
        let page = match spotify::playlist::playlist_items_page(
            token,
            playlist_id,
            Some(ALBUM_FIELDS),
            PLAYLIST_ITEMS_PAGE,
            offset,
        )
        .await
        {
            Ok(page) => page,
            Err(e) => error!("Failed to fetch playlist items: {}", e),
        };

        let fetched = page.items.len();
        for item in page.items {
            let Some(album) = item.track.and_then(|t| t.album) else {
                continue;
            };
            let is_ep =
                album.album_type == "single" && album.total_tracks.map(|t| t > 1).unwrap_or(false);
            if album.album_type == "album" || is_ep {
                albums.push(album);
            }
        }

        if fetched < PLAYLIST_ITEMS_PAGE {
            break;
        }
        offset += PLAYLIST_ITEMS_PAGE;
    }
    albums
}

/// Drops the albums already present in the user's library, keeping order.
async fn filter_unsaved(token: &str, albums: Vec<Album>) -> Vec<Album> {
    let ids: Vec<String> = albums
        .iter()
        .map(|album| utils::uri_id(&album.uri).to_string())
        .collect();
    let saved_flags = match spotify::library::contains_albums(token, &ids).await {
        Ok(flags) => flags,
        Err(e) => error!("Failed to check the library for saved albums: {}", e),
    };

    albums
        .into_iter()
        .zip(saved_flags)
        .filter(|(_, saved)| !saved)
        .map(|(album, _)| album)
        .collect()
}

fn display_unsaved_table(unsaved: &[Album]) {
    let rows: Vec<UnsavedAlbumTableRow> = unsaved
        .iter()
        .enumerate()
        .map(|(index, album)| UnsavedAlbumTableRow {
            index,
            artists: utils::truncate(&utils::artist_names(&album.artists), SPA_TRUNCATE_LEN),
            album: utils::truncate(&album.name, SPA_TRUNCATE_LEN),
            kind: if album.album_type == "single" {
                "EP".to_string()
            } else {
                album.album_type.clone()
            },
            tracks: album.total_tracks.unwrap_or(0),
            release_date: album.release_date.clone().unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows));
}
