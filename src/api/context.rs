use std::sync::Arc;

use axum::http::{HeaderMap, header::ACCEPT_LANGUAGE};

use crate::{Res, locale, management::Library};

/// State shared by every handler.
pub struct AppState {
    pub library: Library,
    pub allowed_countries: Vec<String>,
}

pub type SharedState = Arc<AppState>;

/// Applies the country allow-list and picks the market for a request.
pub fn request_market(headers: &HeaderMap, state: &AppState) -> Res<&'static str> {
    let country = headers
        .get(locale::COUNTRY_HEADER)
        .and_then(|v| v.to_str().ok());
    locale::country_allowed(country, &state.allowed_countries)?;

    let accept_language = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
    Ok(locale::market_for(accept_language))
}
