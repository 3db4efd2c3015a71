use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{AlbumTracksResponse, SaveAlbumsRequest, SavedAlbumItem, SavedAlbumsResponse},
};

/// Page size of the saved-albums endpoint, also its upstream maximum.
pub const SAVED_ALBUMS_PAGE: usize = 50;

/// Page size of the album-tracks endpoint, also its upstream maximum.
pub const ALBUM_TRACKS_PAGE: usize = 50;

// /me/albums/contains rejects more than 20 ids per call
const CONTAINS_CHUNK: usize = 20;

// /me/albums accepts at most 50 ids per call
const SAVE_CHUNK: usize = 50;

/// Retrieves one page of the user's saved albums.
///
/// Retries on 502 Bad Gateway with a delay; other errors propagate.
pub async fn saved_albums_page(
    token: &str,
    limit: usize,
    offset: usize,
) -> Result<Vec<SavedAlbumItem>, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/me/albums?limit={limit}&offset={offset}",
            uri = config::SPOTIFY_API_URL,
            limit = limit,
            offset = offset
        );

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

        let res = response.json::<SavedAlbumsResponse>().await?;
        return Ok(res.items);
    }
}

/// Retrieves one page of an album's track listing.
pub async fn album_tracks_page(
    token: &str,
    album_id: &str,
    limit: usize,
    offset: usize,
) -> Result<AlbumTracksResponse, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(format!(
            "{uri}/albums/{id}/tracks?limit={limit}&offset={offset}",
            uri = config::SPOTIFY_API_URL,
            id = album_id,
            limit = limit,
            offset = offset
        ))
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AlbumTracksResponse>().await
}

/// Saves albums to the user's library, chunking to the endpoint's id limit.
pub async fn save_albums(token: &str, ids: &[String]) -> Result<(), reqwest::Error> {
    let client = Client::new();
    for chunk in ids.chunks(SAVE_CHUNK) {
        client
            .put(format!("{}/me/albums", config::SPOTIFY_API_URL))
            .bearer_auth(token)
            .json(&SaveAlbumsRequest {
                ids: chunk.to_vec(),
            })
            .send()
            .await?
            .error_for_status()?;
    }
    Ok(())
}

/// Checks which of the given albums are already in the user's library.
/// Returns one flag per input id, in input order.
pub async fn contains_albums(token: &str, ids: &[String]) -> Result<Vec<bool>, reqwest::Error> {
    let client = Client::new();
    let mut saved = Vec::with_capacity(ids.len());

    for chunk in ids.chunks(CONTAINS_CHUNK) {
        let response = client
            .get(format!("{}/me/albums/contains", config::SPOTIFY_API_URL))
            .bearer_auth(token)
            .query(&[("ids", chunk.join(","))])
            .send()
            .await?
            .error_for_status()?;

        let flags = response.json::<Vec<bool>>().await?;
        saved.extend(flags);
    }

    Ok(saved)
}
