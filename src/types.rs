use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{config::Credentials, utils};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Shared state between the auth command and the local callback server.
/// The callback fills in the token once the code exchange succeeds.
#[derive(Debug, Clone)]
pub struct AuthFlowState {
    pub credentials: Credentials,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullArtist {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
    pub album_type: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub total_tracks: Option<u32>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
    pub duration_ms: u64,
    pub album: Album,
    // the performing artists, which can differ from the album's artists
    // (compilations credit the album to "Various Artists")
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

/// A track as it appears inside an album listing, without album backlink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleTrack {
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_active: bool,
    #[serde(default)]
    pub volume_percent: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicesResponse {
    pub devices: Vec<Device>,
}

/// Restrictions the upstream player reports for the current playback.
/// Absent fields mean the action is allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Disallows {
    #[serde(default)]
    pub pausing: Option<bool>,
    #[serde(default)]
    pub resuming: Option<bool>,
    #[serde(default)]
    pub skipping_prev: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Actions {
    #[serde(default)]
    pub disallows: Disallows,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackState {
    pub device: Device,
    pub shuffle_state: bool,
    #[serde(default)]
    pub item: Option<Track>,
    #[serde(default)]
    pub actions: Option<Actions>,
}

/// Flattened view of the playback state used by the playback commands.
///
/// One command-scoped record: artist names already joined, the duration
/// already formatted, and the disallow flags pulled up to the top level.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPlayback {
    pub artists: String,
    pub track_name: String,
    pub track_uri: String,
    pub track_id: Option<String>,
    pub track_url: Option<String>,
    pub album_name: String,
    pub album_type: String,
    pub album_uri: String,
    pub album_url: Option<String>,
    pub release_date: String,
    pub duration: String,
    pub volume: Option<u8>,
    pub shuffle_state: bool,
    pub pausing_disallowed: bool,
    pub resuming_disallowed: bool,
    pub skip_prev_disallowed: bool,
}

impl CurrentPlayback {
    /// Builds the flattened view from a raw playback state. Returns `None`
    /// when nothing is playing (no item in the state).
    pub fn from_state(state: &PlaybackState) -> Option<Self> {
        let item = state.item.as_ref()?;
        let disallows = state
            .actions
            .as_ref()
            .map(|a| a.disallows.clone())
            .unwrap_or_default();

        Some(CurrentPlayback {
            artists: utils::artist_names(&item.album.artists),
            track_name: item.name.clone(),
            track_uri: item.uri.clone(),
            track_id: item.id.clone(),
            track_url: item.external_urls.as_ref().map(|u| u.spotify.clone()),
            album_name: item.album.name.clone(),
            album_type: item.album.album_type.clone(),
            album_uri: item.album.uri.clone(),
            album_url: item
                .album
                .external_urls
                .as_ref()
                .map(|u| u.spotify.clone()),
            release_date: item.album.release_date.clone().unwrap_or_default(),
            duration: utils::convert_ms(item.duration_ms),
            volume: state.device.volume_percent,
            shuffle_state: state.shuffle_state,
            pausing_disallowed: disallows.pausing.unwrap_or(false),
            resuming_disallowed: disallows.resuming.unwrap_or(false),
            skip_prev_disallowed: disallows.skipping_prev.unwrap_or(false),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistoryItem {
    pub track: Track,
    pub played_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<PlayHistoryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAlbumItem {
    pub album: Album,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAlbumsResponse {
    pub items: Vec<SavedAlbumItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    pub items: Vec<SimpleTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackCount {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<PlaylistOwner>,
    #[serde(default)]
    pub tracks: Option<TrackCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistsResponse {
    pub items: Vec<Playlist>,
}

/// One entry of a playlist's track listing. Local files and removed tracks
/// come back with null fields, hence the options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub album: Option<Album>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub albums: Option<Page<Album>>,
    #[serde(default)]
    pub artists: Option<Page<FullArtist>>,
    #[serde(default)]
    pub playlists: Option<Page<Playlist>>,
    #[serde(default)]
    pub tracks: Option<Page<Track>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistAlbumsResponse {
    pub items: Vec<Album>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub tempo: f64,
    pub time_signature: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAlbumsRequest {
    pub ids: Vec<String>,
}

#[derive(Tabled)]
pub struct DeviceTableRow {
    pub index: usize,
    pub name: String,
    #[tabled(rename = "type")]
    pub kind: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub index: usize,
    pub name: String,
    pub tracks: u64,
}

#[derive(Tabled)]
pub struct RecentTableRow {
    pub index: usize,
    pub track: String,
    #[tabled(rename = "type")]
    pub album_type: String,
    pub album: String,
    pub played_at: String,
}

#[derive(Tabled)]
pub struct AlbumSearchTableRow {
    pub index: usize,
    #[tabled(rename = "artist(s)")]
    pub artists: String,
    pub album: String,
    pub release_date: String,
}

#[derive(Tabled)]
pub struct ArtistSearchTableRow {
    pub index: usize,
    pub artist: String,
}

#[derive(Tabled)]
pub struct PlaylistSearchTableRow {
    pub index: usize,
    pub name: String,
    pub creator: String,
    pub description: String,
    pub tracks: u64,
}

#[derive(Tabled)]
pub struct TrackSearchTableRow {
    pub index: usize,
    pub track: String,
    pub duration: String,
    #[tabled(rename = "artist(s)")]
    pub artists: String,
    pub album: String,
    pub release_date: String,
}

#[derive(Tabled)]
pub struct UnsavedAlbumTableRow {
    pub index: usize,
    #[tabled(rename = "artist(s)")]
    pub artists: String,
    pub album: String,
    #[tabled(rename = "type")]
    pub kind: String,
    pub tracks: u32,
    pub release_date: String,
}

#[derive(Tabled)]
pub struct ArtistAlbumTableRow {
    pub index: usize,
    pub album: String,
    #[tabled(rename = "type")]
    pub kind: String,
    pub release_date: String,
}

#[derive(Tabled)]
pub struct TopTrackTableRow {
    pub index: usize,
    pub track: String,
    pub duration: String,
}
