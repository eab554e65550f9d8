use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{Res, TuneNestError, types::Token};

use super::SERVICE;

/// Seconds before expiry at which a token is considered stale.
const EXPIRY_MARGIN: u64 = 240;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Owns the application access token for the catalog API.
///
/// Uses the client-credentials grant: no user is involved, so a stale token is
/// simply replaced by a new one.
pub struct TokenManager {
    token_url: String,
    client_id: String,
    client_secret: String,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(token_url: &str, client_id: &str, client_secret: &str) -> Self {
        TokenManager {
            token_url: token_url.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            token: None,
        }
    }

    /// Returns a usable access token, requesting a new one if there is none
    /// yet or the current one is about to expire.
    pub async fn get_valid_token(&mut self, http: &Client) -> Res<String> {
        match &self.token {
            Some(token) if !is_expired(token, now()) => Ok(token.access_token.clone()),
            _ => {
                let token = self.request_token(http).await?;
                let access_token = token.access_token.clone();
                self.token = Some(token);
                Ok(access_token)
            }
        }
    }

    /// Forgets the current token so the next request fetches a fresh one.
    pub fn invalidate(&mut self) {
        self.token = None;
    }

    async fn request_token(&self, http: &Client) -> Res<Token> {
        let response = http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| TuneNestError::from_reqwest(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TuneNestError::transient(
                SERVICE,
                format!("token request failed: HTTP {status}"),
            ));
        }

        let json = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| TuneNestError::from_reqwest(SERVICE, e))?;

        Ok(Token {
            access_token: json.access_token,
            expires_in: json.expires_in,
            obtained_at: now(),
        })
    }
}

fn now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

pub fn is_expired(token: &Token, now: u64) -> bool {
    now + EXPIRY_MARGIN >= token.obtained_at + token.expires_in
}
