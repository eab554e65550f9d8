use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{TuneNestError, warning};

impl TuneNestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TuneNestError::NotFound(_) => StatusCode::NOT_FOUND,
            TuneNestError::Configuration(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TuneNestError::RegionBlocked(_) => StatusCode::FORBIDDEN,
            TuneNestError::UpstreamTransient { .. } | TuneNestError::DataQuality(_) => {
                StatusCode::BAD_GATEWAY
            }
            TuneNestError::RetryExhausted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TuneNestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            TuneNestError::RetryExhausted { .. } => {
                warning!("{}", self);
                "Something went wrong, please try again later.".to_string()
            }
            TuneNestError::UpstreamTransient { .. } | TuneNestError::DataQuality(_) => {
                warning!("{}", self);
                self.to_string()
            }
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}
