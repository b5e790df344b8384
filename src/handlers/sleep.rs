use axum::{
    extract::{Form, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use maud::Markup;
use rust_i18n::t;
use ulid::Ulid;

use crate::{
    extractors::{IsHtmx, SleepToken},
    names,
    rejections::{AppError, ResultExt},
    services::sleep::{SleepLogForm, SleepOutcome},
    utils, views, AppState,
};

use crate::views::sleep as sleep_views;

pub fn routes() -> Router<AppState> {
    Router::new().route(names::SLEEP_URL, get(sleep_page).post(log_night))
}

/// The sleep log a request works on. Visitors without one get a fresh token
/// that is only handed out once something is stored under it.
pub(crate) struct SleepOwner {
    pub token: String,
    pub is_new: bool,
}

impl SleepOwner {
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) => Self {
                token,
                is_new: false,
            },
            None => Self {
                token: Ulid::new().to_string(),
                is_new: true,
            },
        }
    }

    /// `Set-Cookie` for a new log, empty otherwise.
    pub fn cookie_headers(&self, secure: bool) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        if self.is_new {
            let cookie = utils::cookie(
                names::SLEEP_LOG_COOKIE_NAME,
                &self.token,
                names::SLEEP_LOG_MAX_AGE_SECS,
                secure,
            );
            headers.insert(
                SET_COOKIE,
                cookie
                    .parse::<HeaderValue>()
                    .reject("could not build sleep log cookie")?,
            );
        }
        Ok(headers)
    }
}

async fn sleep_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    SleepToken(token): SleepToken,
) -> Result<Markup, AppError> {
    let (summary, entries) = match &token {
        Some(token) => state
            .sleep
            .overview(token)
            .await
            .reject("could not load sleep log")?,
        None => (crate::sleep::summarize(&[]), Vec::new()),
    };

    Ok(views::render(
        is_htmx,
        &t!("sleep.title"),
        sleep_views::sleep_page(&summary, &entries),
    ))
}

async fn log_night(
    State(state): State<AppState>,
    SleepToken(token): SleepToken,
    Form(form): Form<SleepLogForm>,
) -> Result<Response, AppError> {
    let owner = SleepOwner::from_token(token);

    let outcome = state
        .sleep
        .log(&owner.token, form)
        .await
        .reject("could not store sleep entry")?;

    let error = match outcome {
        SleepOutcome::Logged(_) => None,
        SleepOutcome::Invalid(message) => Some(message),
    };

    let (summary, entries) = state
        .sleep
        .overview(&owner.token)
        .await
        .reject("could not load sleep log")?;
    let fragment = sleep_views::tracker(&summary, &entries, error.as_deref());

    let headers = if error.is_none() {
        owner.cookie_headers(state.secure_cookies)?
    } else {
        HeaderMap::new()
    };
    Ok((headers, fragment).into_response())
}
