use reqwest::Client;

use crate::{
    config,
    types::{ArtistAlbumsResponse, SearchResponse, TopTracksResponse},
};

/// Results shown per search; a full page would push the prompt off-screen.
pub const SEARCH_LIMIT: usize = 10;

// top-tracks requires a market; from_token resolves to the user's own
const MARKET: &str = "from_token";

pub async fn search(
    token: &str,
    query: &str,
    kind: &str,
    limit: usize,
) -> Result<SearchResponse, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(format!("{}/search", config::SPOTIFY_API_URL))
        .bearer_auth(token)
        .query(&[
            ("q", query),
            ("type", kind),
            ("limit", &limit.to_string()),
        ])
        .send()
        .await?
        .error_for_status()?;

    response.json::<SearchResponse>().await
}

/// Lists an artist's albums and singles for the search drill-down.
pub async fn artist_albums(
    token: &str,
    artist_id: &str,
) -> Result<ArtistAlbumsResponse, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(format!(
            "{uri}/artists/{id}/albums",
            uri = config::SPOTIFY_API_URL,
            id = artist_id
        ))
        .bearer_auth(token)
        .query(&[("include_groups", "album,single")])
        .send()
        .await?
        .error_for_status()?;

    response.json::<ArtistAlbumsResponse>().await
}

pub async fn artist_top_tracks(
    token: &str,
    artist_id: &str,
) -> Result<TopTracksResponse, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(format!(
            "{uri}/artists/{id}/top-tracks",
            uri = config::SPOTIFY_API_URL,
            id = artist_id
        ))
        .bearer_auth(token)
        .query(&[("market", MARKET)])
        .send()
        .await?
        .error_for_status()?;

    response.json::<TopTracksResponse>().await
}
