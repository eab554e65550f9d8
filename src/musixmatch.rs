use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    Res, TuneNestError,
    types::{LyricsBody, MatcherBody, MusixmatchEnvelope},
};

const SERVICE: &str = "musixmatch";

/// Lyrics lookup: first match artist and title to a Musixmatch track id, then
/// fetch the lyrics body for that id.
pub struct MusixmatchClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl MusixmatchClient {
    pub fn new(http: Client, api_url: &str, api_key: &str) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// `matcher.track.get`: resolves artist and title to a lyrics track id.
    pub async fn match_track(&self, artist: &str, title: &str) -> Res<u64> {
        let body: MatcherBody = self
            .call(
                &format!("lyrics match for {artist} - {title}"),
                "matcher.track.get",
                &[("q_artist", artist), ("q_track", title)],
            )
            .await?;

        Ok(body.track.track_id)
    }

    /// `track.lyrics.get`: the raw lyrics body, disclaimer included.
    pub async fn lyrics(&self, track_id: u64) -> Res<String> {
        let track_id = track_id.to_string();
        let body: LyricsBody = self
            .call(
                &format!("lyrics {track_id}"),
                "track.lyrics.get",
                &[("track_id", track_id.as_str())],
            )
            .await?;

        Ok(body.lyrics.lyrics_body)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        what: &str,
        method: &str,
        params: &[(&str, &str)],
    ) -> Res<T> {
        let response = self
            .http
            .get(format!("{}/{}", self.api_url, method))
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| TuneNestError::from_reqwest(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TuneNestError::from_status(SERVICE, what, status));
        }

        let envelope = response
            .json::<MusixmatchEnvelope>()
            .await
            .map_err(|e| TuneNestError::from_reqwest(SERVICE, e))?;

        decode_envelope(what, envelope)
    }
}

/// Unwraps the Musixmatch envelope. The service reports failures in the
/// envelope header while answering HTTP 200.
pub fn decode_envelope<T: DeserializeOwned>(what: &str, envelope: MusixmatchEnvelope) -> Res<T> {
    match envelope.message.header.status_code {
        200 => serde_json::from_value(envelope.message.body).map_err(|e| {
            TuneNestError::transient(SERVICE, format!("{what}: malformed response: {e}"))
        }),
        404 => Err(TuneNestError::NotFound(what.to_string())),
        code => Err(TuneNestError::transient(
            SERVICE,
            format!("{what}: status {code}"),
        )),
    }
}
