use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::names;

/// Extracts whether the request is an HTMX request by checking the `HX-Request` header.
pub struct IsHtmx(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for IsHtmx {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get("HX-Request")
            .and_then(|v: &axum::http::HeaderValue| v.to_str().ok())
            .is_some_and(|v| v == "true");
        Ok(IsHtmx(is_htmx))
    }
}

fn cookie_value(parts: &Parts, name: &str) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// The quiz session token from the `quiz_session` cookie, if the browser sent one.
pub struct QuizToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for QuizToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(QuizToken(cookie_value(parts, names::QUIZ_SESSION_COOKIE_NAME)))
    }
}

/// The visitor's sleep log token from the `sleep_log` cookie.
pub struct SleepToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for SleepToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SleepToken(cookie_value(parts, names::SLEEP_LOG_COOKIE_NAME)))
    }
}
