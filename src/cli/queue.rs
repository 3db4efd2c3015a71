use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    session::{DeviceNeed, Session},
    spotify::{
        self,
        library::ALBUM_TRACKS_PAGE,
        playlist::PLAYLIST_ITEMS_PAGE,
    },
    success,
    utils::{self, LinkKind},
};

fn queue_spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Queues every track of an album, paging through its track listing.
pub(crate) async fn add_album_to_queue(token: &str, album_uri: &str, device: Option<&str>) {
    let album_id = utils::uri_id(album_uri);
    let pb = queue_spinner("Adding album tracks to queue...");

    let mut offset = 0;
    loop {
        let page =
            match spotify::library::album_tracks_page(token, album_id, ALBUM_TRACKS_PAGE, offset)
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    pb.finish_and_clear();
                    error!("Failed to fetch album tracks: {}", e);
                }
            };

        for track in &page.items {
            if let Err(e) = spotify::player::add_to_queue(token, &track.uri, device).await {
                pb.finish_and_clear();
                error!("Failed to add a track to the queue: {}", e);
            }
        }

        if page.items.len() < ALBUM_TRACKS_PAGE {
            break;
        }
        offset += ALBUM_TRACKS_PAGE;
    }

    pb.finish_and_clear();
    success!("Album successfully added to queue!");
}

/// Queues every track of a playlist, paging through its items. The response
/// is narrowed to the track uris; nothing else is needed here.
pub(crate) async fn add_playlist_to_queue(token: &str, playlist_uri: &str, device: Option<&str>) {
    let playlist_id = utils::uri_id(playlist_uri);
    info!("Adding playlist tracks to queue...");
    let pb = queue_spinner("Queueing playlist tracks...");

    let mut offset = 0;
    loop {
        let page = match spotify::playlist::playlist_items_page(
            token,
            playlist_id,
            Some("items.track.uri"),
            PLAYLIST_ITEMS_PAGE,
            offset,
        )
        .await
        {
            Ok(page) => page,
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch playlist items: {}", e);
            }
        };

        for item in &page.items {
            let Some(uri) = item.track.as_ref().and_then(|t| t.uri.as_deref()) else {
                continue; // local file or removed track
            };
            if let Err(e) = spotify::player::add_to_queue(token, uri, device).await {
                pb.finish_and_clear();
                error!("Failed to add a track to the queue: {}", e);
            }
        }

        if page.items.len() < PLAYLIST_ITEMS_PAGE {
            break;
        }
        offset += PLAYLIST_ITEMS_PAGE;
    }

    pb.finish_and_clear();
    success!("All playlist tracks added successfully!");
}

pub async fn add_to_queue(url: String, device: Option<String>) {
    let parsed = match utils::check_url_format(&url) {
        Ok(parsed) => parsed,
        Err(e) => error!("{}", e),
    };

    let mut session = Session::establish(device, DeviceNeed::Registered).await;
    let token = session.token().await;
    let uri = parsed.to_uri();

    match parsed.kind {
        LinkKind::Track => {
            if let Err(e) = spotify::player::add_to_queue(&token, &uri, session.device()).await {
                error!("Failed to add the track to the queue: {}", e);
            }
            success!("Track successfully added to queue.");
        }
        LinkKind::Album => add_album_to_queue(&token, &uri, session.device()).await,
        LinkKind::Playlist => add_playlist_to_queue(&token, &uri, session.device()).await,
    }
}
