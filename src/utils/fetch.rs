//! Loading the published digest documents.
//!
//! Both documents are static JSON next to the app. A request that outlives
//! `FETCH_TIMEOUT_MS` is abandoned, and day documents are kept in the
//! session cache since a published day never changes.

use js_sys::{Array, Promise};
use keepup_core::{DayDigest, DigestDate, DigestError, DigestIndex};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::{cache, dom};
use crate::config::{self, FETCH_TIMEOUT_MS};
use crate::error::FetchError;

/// Fetch and normalize the date index.
pub async fn fetch_index() -> Result<DigestIndex, FetchError> {
    let text = fetch_text(&config::index_url()).await?;
    DigestIndex::from_json(&text).map_err(parse_error)
}

/// Fetch one day's document, from the session cache when possible.
///
/// A 404 for a listed day becomes [`FetchError::NotPublished`].
pub async fn fetch_day(date: DigestDate) -> Result<DayDigest, FetchError> {
    let key = config::cache::day_key(date);
    if let Some(day) = cache::get::<DayDigest>(&key) {
        return Ok(day);
    }

    let text = fetch_text(&config::day_url(date))
        .await
        .map_err(|e| day_error(e, date))?;
    let day = DayDigest::from_json(&text).map_err(parse_error)?;

    if let Err(e) = cache::set(&key, &day) {
        dom::warn(&format!("day {} not cached: {}", date, e));
    }

    Ok(day)
}

fn day_error(error: FetchError, date: DigestDate) -> FetchError {
    match error {
        FetchError::HttpError(404) => FetchError::NotPublished(date),
        other => other,
    }
}

fn parse_error(error: DigestError) -> FetchError {
    FetchError::ParseError(error.to_string())
}

/// GET `url` as text, giving up after `FETCH_TIMEOUT_MS`.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = dom::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let resp: Response = within_timeout(window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let body = resp.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}

/// Race `promise` against a timer that resolves to `undefined`.
async fn within_timeout(promise: Promise) -> Result<JsValue, FetchError> {
    let window = dom::window().ok_or(FetchError::NoWindow)?;

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            &resolve,
            FETCH_TIMEOUT_MS,
        );
    });

    let race = Promise::race(&Array::of2(&promise, &timer));
    match JsFuture::from(race).await {
        Ok(value) if value.is_undefined() => Err(FetchError::Timeout),
        Ok(value) => Ok(value),
        Err(e) => Err(FetchError::NetworkError(
            e.as_string().unwrap_or_else(|| "request failed".to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_day_is_not_published() {
        let date = DigestDate::parse("2026-10-17").unwrap();
        assert_eq!(day_error(FetchError::HttpError(404), date), FetchError::NotPublished(date));
        assert_eq!(day_error(FetchError::HttpError(503), date), FetchError::HttpError(503));
        assert_eq!(day_error(FetchError::Timeout, date), FetchError::Timeout);
    }

    #[test]
    fn test_parse_error_keeps_detail() {
        let err = DayDigest::from_json("{\"digest\": 3}").unwrap_err();
        assert!(matches!(parse_error(err), FetchError::ParseError(msg) if !msg.is_empty()));
    }
}
