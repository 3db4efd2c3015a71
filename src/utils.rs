use std::fmt;

use chrono::{Local, NaiveDateTime, TimeZone};

use crate::types::ArtistRef;

/// Default display width before table cells get an ellipsis.
pub const TRUNCATE_LEN: usize = 50;

pub fn convert_ms(duration_ms: u64) -> String {
    let total_seconds = duration_ms as f64 / 1000.0;
    let mut minutes = (total_seconds / 60.0).floor() as u64;
    let mut seconds = (total_seconds % 60.0).round() as u64;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    format!("{}:{:02}", minutes, seconds)
}

pub fn parse_timestamp(timestamp: &str) -> Result<u64, String> {
    let invalid = || "Invalid format. Proper format is MM:SS.".to_string();

    let (minutes, seconds) = timestamp.split_once(':').ok_or_else(invalid)?;
    if seconds.len() != 2 {
        return Err(invalid());
    }
    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: u64 = seconds.parse().map_err(|_| invalid())?;
    if seconds > 59 {
        return Err(invalid());
    }

    minutes
        .checked_mul(60_000)
        .and_then(|ms| ms.checked_add(seconds * 1_000))
        .ok_or_else(invalid)
}

/// Parses a `YYYYMMDD HH:MM` string in the local timezone to epoch
/// milliseconds, the unit the recently-played endpoint expects.
pub fn parse_datetime(datetime_str: &str) -> Result<i64, String> {
    let naive = NaiveDateTime::parse_from_str(datetime_str, "%Y%m%d %H:%M")
        .map_err(|_| "Invalid datetime. Proper format is YYYYMMDD HH:MM.".to_string())?;
    let local = Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| "Ambiguous local datetime.".to_string())?;
    Ok(local.timestamp_millis())
}

pub fn truncate(name: &str, length: usize) -> String {
    if name.chars().count() > length {
        let truncated: String = name.chars().take(length).collect();
        format!("{}...", truncated)
    } else {
        name.to_string()
    }
}

pub fn artist_names(artists: &[ArtistRef]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Track,
    Album,
    Playlist,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkKind::Track => "track",
            LinkKind::Album => "album",
            LinkKind::Playlist => "playlist",
        };
        write!(f, "{}", s)
    }
}

/// A validated `open.spotify.com` share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyUrl {
    pub kind: LinkKind,
    pub id: String,
}

impl SpotifyUrl {
    pub fn to_uri(&self) -> String {
        format!("spotify:{}:{}", self.kind, self.id)
    }
}

/// Validates a Spotify share URL and extracts its kind and id.
///
/// Accepts `https://open.spotify.com/{track|album|playlist}/<22 base62 chars>`
/// with an optional query string; everything else is rejected.
pub fn check_url_format(url: &str) -> Result<SpotifyUrl, String> {
    let invalid = || "An invalid URL was provided.".to_string();

    let rest = url
        .strip_prefix("https://open.spotify.com/")
        .ok_or_else(invalid)?;
    let (kind, rest) = rest.split_once('/').ok_or_else(invalid)?;
    let kind = match kind {
        "track" => LinkKind::Track,
        "album" => LinkKind::Album,
        "playlist" => LinkKind::Playlist,
        _ => return Err(invalid()),
    };

    let id = rest.split('?').next().unwrap_or_default();
    if id.len() != 22 || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid());
    }

    Ok(SpotifyUrl {
        kind,
        id: id.to_string(),
    })
}

/// Extracts the bare id from a `spotify:kind:id` URI. Plain ids pass through.
pub fn uri_id(uri: &str) -> &str {
    uri.rsplit(':').next().unwrap_or(uri)
}
