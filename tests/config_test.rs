use std::{collections::HashMap, time::Duration};

use tunenest::{
    TuneNestError,
    config::{DEFAULT_PLAYLIST_CAP, DEFAULT_SERVER_ADDRESS, DEFAULT_SPOTIFY_API_URL, Settings},
};

fn settings(vars: &[(&str, &str)]) -> tunenest::Res<Settings> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|key| vars.get(key).cloned())
}

const REQUIRED: [(&str, &str); 3] = [
    ("SPOTIFY_CLIENT_ID", "client"),
    ("SPOTIFY_CLIENT_SECRET", "secret"),
    ("YOUTUBE_API_KEY", "yt-key"),
];

#[test]
fn test_defaults() {
    let s = settings(&REQUIRED).unwrap();

    assert_eq!(s.server_address, DEFAULT_SERVER_ADDRESS);
    assert_eq!(s.spotify_api_url, DEFAULT_SPOTIFY_API_URL);
    assert_eq!(s.playlist_cap, DEFAULT_PLAYLIST_CAP);
    assert_eq!(s.max_retries, 3);
    assert_eq!(s.retry_delay, Duration::from_secs(2));
    assert!(s.musixmatch_api_key.is_none());
    assert!(s.allowed_countries.is_empty());
    assert!(s.playlists_file.ends_with("playlists.json"));
}

#[test]
fn test_missing_credentials() {
    for missing in ["SPOTIFY_CLIENT_ID", "SPOTIFY_CLIENT_SECRET", "YOUTUBE_API_KEY"] {
        let vars: Vec<(&str, &str)> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != missing)
            .collect();

        match settings(&vars) {
            Err(TuneNestError::Configuration(message)) => assert!(message.contains(missing)),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }
}

#[test]
fn test_blank_credential_counts_as_missing() {
    let mut vars = REQUIRED.to_vec();
    vars[2] = ("YOUTUBE_API_KEY", "  ");
    assert!(settings(&vars).is_err());
}

#[test]
fn test_overrides() {
    let mut vars = REQUIRED.to_vec();
    vars.extend([
        ("PORT", "8080"),
        ("MUSIXMATCH_API_KEY", "mxm"),
        ("TUNENEST_PLAYLIST_CAP", "50"),
        ("TUNENEST_MAX_RETRIES", "1"),
        ("TUNENEST_RETRY_DELAY_MS", "250"),
        ("TUNENEST_ALLOWED_COUNTRIES", "jp, us,,"),
        ("TUNENEST_PLAYLISTS_FILE", "/tmp/catalog.json"),
    ]);

    let s = settings(&vars).unwrap();

    assert_eq!(s.server_address, "0.0.0.0:8080");
    assert_eq!(s.musixmatch_api_key.as_deref(), Some("mxm"));
    assert_eq!(s.playlist_cap, 50);
    assert_eq!(s.max_retries, 1);
    assert_eq!(s.retry_delay, Duration::from_millis(250));
    assert_eq!(s.allowed_countries, vec!["JP".to_string(), "US".to_string()]);
    assert_eq!(s.playlists_file.to_str(), Some("/tmp/catalog.json"));
}

#[test]
fn test_server_address_wins_over_port() {
    let mut vars = REQUIRED.to_vec();
    vars.extend([("SERVER_ADDRESS", "127.0.0.1:3000"), ("PORT", "8080")]);
    assert_eq!(settings(&vars).unwrap().server_address, "127.0.0.1:3000");
}

#[test]
fn test_invalid_numbers() {
    for (key, value) in [
        ("PORT", "http"),
        ("TUNENEST_PLAYLIST_CAP", "lots"),
        ("TUNENEST_PLAYLIST_CAP", "0"),
        ("TUNENEST_MAX_RETRIES", "-1"),
    ] {
        let mut vars = REQUIRED.to_vec();
        vars.push((key, value));
        assert!(
            matches!(settings(&vars), Err(TuneNestError::Configuration(_))),
            "{key}={value} should be rejected"
        );
    }
}
