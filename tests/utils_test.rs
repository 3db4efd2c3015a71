use spoticli::config::callback_bind_addr;
use spoticli::session::DeviceNeed;
use spoticli::types::{ArtistRef, CurrentPlayback, PlaybackState, Track};
use spoticli::utils::*;

#[test]
fn test_convert_ms() {
    assert_eq!(convert_ms(225461), "3:45");
    assert_eq!(convert_ms(600000), "10:00");

    // Seconds are rounded, not floored
    assert_eq!(convert_ms(5499), "0:05");
    assert_eq!(convert_ms(5500), "0:06");

    // Rounding up to a full minute rolls over
    assert_eq!(convert_ms(119600), "2:00");

    assert_eq!(convert_ms(0), "0:00");
    assert_eq!(convert_ms(1000), "0:01");
}

#[test]
fn test_parse_timestamp() {
    assert_eq!(parse_timestamp("3:45").unwrap(), 225000);
    assert_eq!(parse_timestamp("10:00").unwrap(), 600000);
    assert_eq!(parse_timestamp("0:00").unwrap(), 0);
}

#[test]
fn test_parse_timestamp_invalid() {
    let expected = "Invalid format. Proper format is MM:SS.";

    // No separator
    assert_eq!(parse_timestamp("345").unwrap_err(), expected);
    // Seconds must be exactly two digits
    assert_eq!(parse_timestamp("3:5").unwrap_err(), expected);
    assert_eq!(parse_timestamp("3:455").unwrap_err(), expected);
    // Seconds above 59 make no sense
    assert_eq!(parse_timestamp("3:61").unwrap_err(), expected);
    // Non-numeric input
    assert_eq!(parse_timestamp("a:bc").unwrap_err(), expected);
    assert_eq!(parse_timestamp("").unwrap_err(), expected);
    // Minutes too large to convert to milliseconds
    assert_eq!(
        parse_timestamp("400000000000000000:00").unwrap_err(),
        expected
    );
    assert_eq!(
        parse_timestamp("18446744073709551615:59").unwrap_err(),
        expected
    );
}

#[test]
fn test_parse_datetime() {
    // The result depends on the local timezone, so assert relative facts:
    // one minute apart in the input is one minute apart in epoch millis.
    let earlier = parse_datetime("20210813 20:01").unwrap();
    let later = parse_datetime("20210813 20:02").unwrap();
    assert_eq!(later - earlier, 60_000);

    let other_year = parse_datetime("20200403 13:37").unwrap();
    assert!(other_year < earlier);
}

#[test]
fn test_parse_datetime_invalid() {
    assert!(parse_datetime("2021-08-13 20:01").is_err());
    assert!(parse_datetime("20210813").is_err());
    assert!(parse_datetime("not a date").is_err());
}

#[test]
fn test_truncate() {
    let artists_str = "Durand Jones & The Indications, Aaron Frazer";

    assert_eq!(
        truncate(artists_str, 40),
        "Durand Jones & The Indications, Aaron Fr..."
    );
    assert_eq!(
        truncate(artists_str, 35),
        "Durand Jones & The Indications, Aar..."
    );
    assert_eq!(truncate(artists_str, TRUNCATE_LEN), artists_str);
}

#[test]
fn test_truncate_counts_characters_not_bytes() {
    // Multi-byte characters must not be split in half
    let name = "TOP OF TOKYO/TT2 オワリのうた";
    let truncated = truncate(name, 20);
    assert!(truncated.ends_with("..."));
    assert_eq!(truncated.chars().count(), 23);
}

#[test]
fn test_artist_names() {
    let artists = vec![
        ArtistRef {
            name: "Durand Jones & The Indications".to_string(),
        },
        ArtistRef {
            name: "Aaron Frazer".to_string(),
        },
    ];
    assert_eq!(
        artist_names(&artists),
        "Durand Jones & The Indications, Aaron Frazer"
    );

    assert_eq!(artist_names(&[]), "");
}

#[test]
fn test_check_url_format_valid() {
    let track = check_url_format("https://open.spotify.com/track/6qXQYEZeRSgmAvDm4ZEAUZ").unwrap();
    assert_eq!(track.kind, LinkKind::Track);
    assert_eq!(track.id, "6qXQYEZeRSgmAvDm4ZEAUZ");
    assert_eq!(track.to_uri(), "spotify:track:6qXQYEZeRSgmAvDm4ZEAUZ");

    let album = check_url_format("https://open.spotify.com/album/4ogV05oprfriua7n9icbvN").unwrap();
    assert_eq!(album.kind, LinkKind::Album);
    assert_eq!(album.to_uri(), "spotify:album:4ogV05oprfriua7n9icbvN");

    // Share links carry a query string that must be ignored
    let playlist = check_url_format(
        "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc123",
    )
    .unwrap();
    assert_eq!(playlist.kind, LinkKind::Playlist);
    assert_eq!(playlist.id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_check_url_format_invalid() {
    let expected = "An invalid URL was provided.";

    // Wrong host
    assert_eq!(
        check_url_format("https://example.com/track/6qXQYEZeRSgmAvDm4ZEAUZ").unwrap_err(),
        expected
    );
    // Unsupported kind
    assert_eq!(
        check_url_format("https://open.spotify.com/artist/6qXQYEZeRSgmAvDm4ZEAUZ").unwrap_err(),
        expected
    );
    // Id too short
    assert_eq!(
        check_url_format("https://open.spotify.com/track/abc").unwrap_err(),
        expected
    );
    // Id with non-alphanumeric characters
    assert_eq!(
        check_url_format("https://open.spotify.com/track/6qXQYEZeRSgmAvDm4ZEA_Z").unwrap_err(),
        expected
    );
    // No path at all
    assert_eq!(check_url_format("https://open.spotify.com/").unwrap_err(), expected);
    assert_eq!(check_url_format("not a url").unwrap_err(), expected);
}

#[test]
fn test_uri_id() {
    assert_eq!(
        uri_id("spotify:track:6qXQYEZeRSgmAvDm4ZEAUZ"),
        "6qXQYEZeRSgmAvDm4ZEAUZ"
    );
    assert_eq!(
        uri_id("spotify:album:4ogV05oprfriua7n9icbvN"),
        "4ogV05oprfriua7n9icbvN"
    );
    // Bare ids pass through unchanged
    assert_eq!(uri_id("4ogV05oprfriua7n9icbvN"), "4ogV05oprfriua7n9icbvN");
}

#[test]
fn test_link_kind_display() {
    assert_eq!(LinkKind::Track.to_string(), "track");
    assert_eq!(LinkKind::Album.to_string(), "album");
    assert_eq!(LinkKind::Playlist.to_string(), "playlist");
}

#[test]
fn test_callback_bind_addr() {
    assert_eq!(
        callback_bind_addr("http://localhost:8888/callback").unwrap(),
        "127.0.0.1:8888"
    );
    assert_eq!(
        callback_bind_addr("http://127.0.0.1:9090/callback").unwrap(),
        "127.0.0.1:9090"
    );
    // No explicit port binds to 80
    assert_eq!(
        callback_bind_addr("http://localhost/callback").unwrap(),
        "127.0.0.1:80"
    );

    assert!(callback_bind_addr("ftp://localhost:8888").is_err());
    assert!(callback_bind_addr("http://localhost:notaport/cb").is_err());
    assert!(callback_bind_addr("http:///callback").is_err());
}

#[test]
fn test_current_playback_from_state() {
    let state: PlaybackState = serde_json::from_str(
        r#"{
            "device": {
                "id": "abc",
                "name": "Desktop",
                "type": "Computer",
                "is_active": true,
                "volume_percent": 100
            },
            "shuffle_state": false,
            "item": {
                "id": "6qXQYEZeRSgmAvDm4ZEAUZ",
                "name": "Love Will Work It Out",
                "uri": "spotify:track:6qXQYEZeRSgmAvDm4ZEAUZ",
                "duration_ms": 225461,
                "external_urls": {
                    "spotify": "https://open.spotify.com/track/6qXQYEZeRSgmAvDm4ZEAUZ"
                },
                "album": {
                    "name": "Private Space",
                    "uri": "spotify:album:4ogV05oprfriua7n9icbvN",
                    "album_type": "album",
                    "release_date": "2021-07-30",
                    "artists": [
                        {"name": "Durand Jones & The Indications"},
                        {"name": "Aaron Frazer"}
                    ],
                    "external_urls": {
                        "spotify": "https://open.spotify.com/album/4ogV05oprfriua7n9icbvN"
                    }
                }
            },
            "actions": {
                "disallows": {
                    "resuming": true,
                    "skipping_prev": true
                }
            }
        }"#,
    )
    .unwrap();

    let playback = CurrentPlayback::from_state(&state).unwrap();
    assert_eq!(
        playback.artists,
        "Durand Jones & The Indications, Aaron Frazer"
    );
    assert_eq!(playback.track_name, "Love Will Work It Out");
    assert_eq!(playback.track_uri, "spotify:track:6qXQYEZeRSgmAvDm4ZEAUZ");
    assert_eq!(playback.album_name, "Private Space");
    assert_eq!(playback.album_type, "album");
    assert_eq!(playback.album_uri, "spotify:album:4ogV05oprfriua7n9icbvN");
    assert_eq!(
        playback.album_url.as_deref(),
        Some("https://open.spotify.com/album/4ogV05oprfriua7n9icbvN")
    );
    assert_eq!(playback.release_date, "2021-07-30");
    assert_eq!(playback.duration, "3:45");
    assert_eq!(playback.volume, Some(100));
    assert!(!playback.shuffle_state);
    assert!(!playback.pausing_disallowed);
    assert!(playback.resuming_disallowed);
    assert!(playback.skip_prev_disallowed);
}

#[test]
fn test_track_artists_differ_from_album_artists() {
    // A compilation credits the album to "Various Artists"; the track row
    // must show the performing artists instead.
    let track: Track = serde_json::from_str(
        r#"{
            "name": "September",
            "uri": "spotify:track:2grjqo0Frpf2okIBiifQKs",
            "duration_ms": 215093,
            "artists": [
                {"name": "Earth, Wind & Fire"}
            ],
            "album": {
                "name": "70s Party Classics",
                "uri": "spotify:album:5XfJmldgWzrc1AIdbBaVZn",
                "album_type": "compilation",
                "release_date": "2014-01-01",
                "artists": [
                    {"name": "Various Artists"}
                ]
            }
        }"#,
    )
    .unwrap();

    assert_eq!(artist_names(&track.artists), "Earth, Wind & Fire");
    assert_eq!(artist_names(&track.album.artists), "Various Artists");
}

#[test]
fn test_device_need_pause_after_transfer() {
    // Commands that prompt before playing (queueing, browsing tables) must
    // pause a freshly activated device; direct playback commands must not.
    assert!(DeviceNeed::Registered.pauses_after_transfer());
    assert!(!DeviceNeed::Playback.pauses_after_transfer());
    assert!(!DeviceNeed::None.pauses_after_transfer());
}

#[test]
fn test_current_playback_from_state_nothing_playing() {
    let state: PlaybackState = serde_json::from_str(
        r#"{
            "device": {
                "id": "abc",
                "name": "Desktop",
                "type": "Computer",
                "is_active": true,
                "volume_percent": 50
            },
            "shuffle_state": true,
            "item": null
        }"#,
    )
    .unwrap();

    assert!(CurrentPlayback::from_state(&state).is_none());
}
