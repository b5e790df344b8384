#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use moodmind::{router, store::Store, AppState};

pub fn app() -> axum::Router {
    router(AppState {
        chatbot_delay: Duration::ZERO,
        ..AppState::new(Store::new())
    })
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(resp).await).expect("body should be json")
}

pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build should succeed")
}

/// Form post the way htmx sends it.
pub fn htmx_form_post(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true");
    if let Some(cookie) = cookie {
        req = req.header("cookie", cookie);
    }
    req.body(Body::from(form.to_string()))
        .expect("request build should succeed")
}
