//! Storefront selection from request headers.
//!
//! The catalog service licenses tracks per market, so the market sent upstream
//! follows the visitor's language preference. Countries can additionally be
//! restricted through an allow-list checked against the edge proxy's country
//! header.

use crate::{Res, TuneNestError};

pub const DEFAULT_MARKET: &str = "US";

/// Header set by the edge proxy with the visitor's ISO country code.
pub const COUNTRY_HEADER: &str = "cf-ipcountry";

// Most specific tags first; region-qualified tags win over bare languages.
const LANGUAGE_MARKETS: [(&str, &str); 8] = [
    ("en-gb", "GB"),
    ("pt-br", "BR"),
    ("ja", "JP"),
    ("en", "US"),
    ("de", "DE"),
    ("fr", "FR"),
    ("es", "ES"),
    ("ko", "KR"),
];

fn market_for_tag(tag: &str) -> Option<&'static str> {
    let tag = tag.trim().to_ascii_lowercase();
    if let Some((_, market)) = LANGUAGE_MARKETS.iter().find(|(lang, _)| *lang == tag) {
        return Some(*market);
    }

    let primary = tag.split('-').next()?;
    LANGUAGE_MARKETS
        .iter()
        .find(|(lang, _)| *lang == primary)
        .map(|(_, market)| *market)
}

/// Picks the market for an `Accept-Language` header value.
///
/// Tags are tried in descending `q` order (stable for equal weights); the first
/// one with a known market wins. Missing or unrecognized headers select
/// [`DEFAULT_MARKET`].
///
/// # Example
///
/// ```
/// assert_eq!(market_for(Some("fr-CH, ja;q=0.9, en;q=0.8")), "FR");
/// assert_eq!(market_for(Some("xx")), "US");
/// ```
pub fn market_for(accept_language: Option<&str>) -> &'static str {
    let Some(header) = accept_language else {
        return DEFAULT_MARKET;
    };

    let mut weighted: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let q = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            (q > 0.0).then_some((tag, q))
        })
        .collect();

    weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    weighted
        .into_iter()
        .find_map(|(tag, _)| market_for_tag(tag))
        .unwrap_or(DEFAULT_MARKET)
}

/// Checks a visitor country against the allow-list.
///
/// An empty allow-list or a missing header lets the request through.
pub fn country_allowed(country: Option<&str>, allow_list: &[String]) -> Res<()> {
    let Some(country) = country.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(());
    };

    if allow_list.is_empty() || allow_list.iter().any(|c| c.eq_ignore_ascii_case(country)) {
        Ok(())
    } else {
        Err(TuneNestError::RegionBlocked(country.to_ascii_uppercase()))
    }
}
