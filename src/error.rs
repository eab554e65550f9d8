use reqwest::StatusCode;
use thiserror::Error;

/// Failure categories shared by the clients, the pipeline and the HTTP surface.
///
/// Callers branch on the variant rather than on messages: list operations skip
/// `DataQuality` items, the song-detail path retries everything but
/// `NotFound`, and the web layer maps each kind to its own status code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TuneNestError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("upstream {service} failed: {message}")]
    UpstreamTransient { service: String, message: String },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("malformed record: {0}")]
    DataQuality(String),

    #[error("max retries exceeded after {attempts} attempts: {last_error}")]
    RetryExhausted { attempts: u32, last_error: String },

    #[error("not available in region {0}")]
    RegionBlocked(String),
}

impl TuneNestError {
    pub fn transient(service: &str, message: impl Into<String>) -> Self {
        TuneNestError::UpstreamTransient {
            service: service.to_string(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TuneNestError::NotFound(_))
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, TuneNestError::UpstreamTransient { .. })
    }

    /// Classifies a non-success HTTP status returned by `service` for `what`.
    pub fn from_status(service: &str, what: &str, status: StatusCode) -> Self {
        if status == StatusCode::NOT_FOUND {
            return TuneNestError::NotFound(what.to_string());
        }

        TuneNestError::transient(service, format!("{what}: HTTP {status}"))
    }

    /// Classifies a transport or decoding error raised by reqwest.
    pub fn from_reqwest(service: &str, err: reqwest::Error) -> Self {
        match err.status() {
            Some(StatusCode::NOT_FOUND) => {
                let what = err
                    .url()
                    .map(|u| u.path().to_string())
                    .unwrap_or_else(|| service.to_string());
                TuneNestError::NotFound(what)
            }
            _ if err.is_decode() => {
                TuneNestError::transient(service, format!("malformed response: {err}"))
            }
            _ => TuneNestError::transient(service, err.to_string()),
        }
    }
}
