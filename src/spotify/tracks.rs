use crate::{
    Res,
    types::{AudioFeaturesResponse, FeaturesById, RawTrack},
};

use super::SpotifyClient;

/// Maximum number of ids the audio-features endpoint accepts per request.
pub const AUDIO_FEATURES_BATCH: usize = 50;

impl SpotifyClient {
    /// Retrieves a single track (`GET /tracks/{id}`).
    pub async fn track(&self, id: &str, market: &str) -> Res<RawTrack> {
        let id = self.checked_id("track", id)?;
        self.get_json(
            &format!("track {id}"),
            &format!("/tracks/{id}"),
            &[("market", market.to_string())],
        )
        .await
    }

    /// Retrieves audio features for any number of tracks.
    ///
    /// Ids are sent in batches of [`AUDIO_FEATURES_BATCH`] and the responses
    /// merged into one map. Spotify answers `null` for tracks it has no
    /// analysis for; those ids are simply missing from the result. Batches run
    /// one after another and the first failing batch fails the whole call.
    pub async fn audio_features(&self, ids: &[String]) -> Res<FeaturesById> {
        let mut features = FeaturesById::with_capacity(ids.len());

        let valid: Vec<&str> = ids
            .iter()
            .map(String::as_str)
            .filter(|id| crate::utils::is_catalog_id(id))
            .collect();

        for chunk in valid.chunks(AUDIO_FEATURES_BATCH) {
            let res: AudioFeaturesResponse = self
                .get_json(
                    "audio features",
                    "/audio-features",
                    &[("ids", chunk.join(","))],
                )
                .await?;

            features.extend(
                res.audio_features
                    .into_iter()
                    .flatten()
                    .map(|f| (f.id.clone(), f)),
            );
        }

        Ok(features)
    }
}
