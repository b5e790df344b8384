rust_i18n::i18n!("locales", fallback = "en");

pub mod extractors;
pub mod handlers;
pub mod names;
pub mod quiz;
pub mod rejections;
pub mod services;
pub mod sessions;
pub mod sleep;
pub mod statics;
pub mod store;
pub mod utils;
pub mod views;

use std::time::Duration;

use axum::{middleware, Router};

use services::{contact::ContactService, newsletter::NewsletterService, sleep::SleepService};
use sessions::QuizSessions;
use store::Store;

#[derive(Clone)]
pub struct AppState {
    pub contact: ContactService,
    pub newsletter: NewsletterService,
    pub sleep: SleepService,
    pub sessions: QuizSessions,
    pub secure_cookies: bool,
    pub chatbot_delay: Duration,
    pub emotion_detection: bool,
}

impl AppState {
    /// State with default settings over `store`.
    pub fn new(store: Store) -> Self {
        Self {
            contact: ContactService::new(store.clone()),
            newsletter: NewsletterService::new(store.clone()),
            sleep: SleepService::new(store),
            sessions: QuizSessions::new(names::DEFAULT_MAX_QUIZ_SESSIONS),
            secure_cookies: false,
            chatbot_delay: Duration::from_millis(names::DEFAULT_CHATBOT_DELAY_MS),
            emotion_detection: true,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::sleep::routes())
        .layer(middleware::from_fn(csrf_check))
        .merge(handlers::api::routes())
        .nest("/static", statics::routes())
        .fallback(rejections::not_found)
        .with_state(state)
}

/// htmx pages only post through htmx; anything else is refused.
async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            tracing::warn!("blocked non-htmx {} {}", req.method(), req.uri());
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
