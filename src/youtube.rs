use reqwest::Client;

use crate::{Res, TuneNestError, types::VideoSearchResponse};

const SERVICE: &str = "youtube";

/// Keyword search against the YouTube Data API, returning the best match.
pub struct YouTubeClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(http: Client, api_url: &str, api_key: &str) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Returns the id of the first video matching `query`.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the search has no video result.
    /// - `UpstreamTransient` for quota exhaustion and any other HTTP failure.
    pub async fn search(&self, query: &str) -> Res<String> {
        let response = self
            .http
            .get(format!("{}/search", self.api_url))
            .query(&[
                ("q", query),
                ("type", "video"),
                ("part", "id,snippet"),
                ("maxResults", "1"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| TuneNestError::from_reqwest(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            // The API answers 403 for an exhausted quota; that is not a missing video.
            return Err(TuneNestError::transient(
                SERVICE,
                format!("An HTTP error occurred: {status}"),
            ));
        }

        let res = response
            .json::<VideoSearchResponse>()
            .await
            .map_err(|e| TuneNestError::from_reqwest(SERVICE, e))?;

        first_video_id(res).ok_or_else(|| TuneNestError::NotFound(format!("video for {query:?}")))
    }
}

pub fn first_video_id(res: VideoSearchResponse) -> Option<String> {
    res.items
        .into_iter()
        .find_map(|item| item.id.video_id)
        .filter(|id| !id.is_empty())
}
