use reqwest::Client;

use crate::{
    config,
    types::{
        AddTracksRequest, CreatePlaylistRequest, CreatePlaylistResponse, Playlist,
        PlaylistItemsResponse, PlaylistsResponse, SnapshotResponse,
    },
};

/// Page size of the playlist-items endpoint, also its upstream maximum.
pub const PLAYLIST_ITEMS_PAGE: usize = 100;

// POST /playlists/{id}/tracks accepts at most 100 uris per call
const ADD_TRACKS_CHUNK: usize = 100;

/// Lists the current user's playlists (most recently created first).
pub async fn current_user_playlists(
    token: &str,
    limit: usize,
) -> Result<Vec<Playlist>, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(format!(
            "{uri}/me/playlists?limit={limit}",
            uri = config::SPOTIFY_API_URL,
            limit = limit
        ))
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<PlaylistsResponse>().await?;
    Ok(res.items)
}

pub async fn create(
    token: &str,
    user_id: &str,
    request: &CreatePlaylistRequest,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let client = Client::new();
    let response = client
        .post(format!(
            "{uri}/users/{user}/playlists",
            uri = config::SPOTIFY_API_URL,
            user = user_id
        ))
        .bearer_auth(token)
        .json(request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Adds tracks to a playlist, chunking to the endpoint's uri limit.
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<(), reqwest::Error> {
    let client = Client::new();
    for chunk in uris.chunks(ADD_TRACKS_CHUNK) {
        let response = client
            .post(format!(
                "{uri}/playlists/{id}/tracks",
                uri = config::SPOTIFY_API_URL,
                id = playlist_id
            ))
            .bearer_auth(token)
            .json(&AddTracksRequest {
                uris: chunk.to_vec(),
            })
            .send()
            .await?
            .error_for_status()?;

        response.json::<SnapshotResponse>().await?;
    }
    Ok(())
}

/// Retrieves one page of a playlist's items.
///
/// `fields` narrows the response to the listed keys, which keeps large
/// playlist transfers small.
pub async fn playlist_items_page(
    token: &str,
    playlist_id: &str,
    fields: Option<&str>,
    limit: usize,
    offset: usize,
) -> Result<PlaylistItemsResponse, reqwest::Error> {
    let client = Client::new();
    let mut req = client
        .get(format!(
            "{uri}/playlists/{id}/tracks",
            uri = config::SPOTIFY_API_URL,
            id = playlist_id
        ))
        .bearer_auth(token)
        .query(&[
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ]);
    if let Some(fields) = fields {
        req = req.query(&[("fields", fields)]);
    }

    let response = req.send().await?.error_for_status()?;
    response.json::<PlaylistItemsResponse>().await
}
