mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{app, body_string, htmx_form_post};
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn homepage_is_a_full_page() {
    let resp = app().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Facial Emotion Recognition"));
    assert!(body.contains("Frequently Asked Questions"));
    assert!(body.contains("<title>Home - MoodMind</title>"));
}

#[tokio::test]
async fn htmx_navigation_gets_a_fragment() {
    let req = Request::builder()
        .uri("/")
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    let body = body_string(resp).await;
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("<title>Home - MoodMind</title>"));
}

#[tokio::test]
async fn sleep_page_links_from_navigation() {
    let body = body_string(app().oneshot(get("/")).await.unwrap()).await;
    assert!(body.contains("href=\"/sleep\""));
}

#[tokio::test]
async fn form_posts_without_htmx_are_forbidden() {
    for uri in ["/quiz/start", "/contact", "/newsletter", "/sleep"] {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("email=jane%40example.com"))
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{uri}");
    }
}

#[tokio::test]
async fn contact_form_reports_missing_fields() {
    let resp = app()
        .oneshot(htmx_form_post("/contact", "name=Jane&email=jane%40example.com", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Please select a subject. Message must be at least 10 characters."));
    assert!(body.contains("id=\"contact-form\""));
}

#[tokio::test]
async fn contact_form_is_accepted() {
    let resp = app()
        .oneshot(htmx_form_post(
            "/contact",
            "name=Jane&email=jane%40example.com&subject=Support&message=When+does+it+launch%3F",
            None,
        ))
        .await
        .unwrap();
    assert!(body_string(resp).await.contains("Message sent"));
}

#[tokio::test]
async fn newsletter_form_flags_duplicates() {
    let app = app();
    let signup = || htmx_form_post("/newsletter", "email=jane%40example.com", None);

    let resp = app.clone().oneshot(signup()).await.unwrap();
    assert!(body_string(resp).await.contains("Subscribed!"));

    let resp = app.oneshot(signup()).await.unwrap();
    assert!(body_string(resp).await.contains("Already subscribed"));
}

#[tokio::test]
async fn serves_static_files() {
    let resp = app().oneshot(get("/static/index.css")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/css");

    let resp = app().oneshot(get("/static/missing.js")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let resp = app().oneshot(get("/nowhere")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
