mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{app, body_json, json_post};
use serde_json::json;
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request build should succeed")
}

#[tokio::test]
async fn initial_questions_are_first_five() {
    let resp = app().oneshot(get("/api/quiz/questions")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(body[0]["category"], "anxiety");
    assert_eq!(body[0]["options"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn follow_up_targets_top_categories() {
    let answers = json!({
        "answers": [
            { "questionId": 1, "selectedValue": 3 },
            { "questionId": 2, "selectedValue": 3 },
            { "questionId": 3, "selectedValue": 3 },
            { "questionId": 4, "selectedValue": 3 },
            { "questionId": 5, "selectedValue": 3 }
        ]
    });
    let resp = app()
        .oneshot(json_post("/api/quiz/follow-up", answers))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["id"], 6);
    assert_eq!(questions[0]["category"], "depression");
}

#[tokio::test]
async fn score_of_no_answers_is_defined() {
    let resp = app()
        .oneshot(json_post("/api/quiz/score", json!({ "answers": [] })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "anxiety": 0,
            "depression": 0,
            "stress": 0,
            "wellbeing": 0,
            "sleep": 0,
            "overallScore": 0,
            "mentalState": "Excellent",
            "recommendations": [
                "Maintain a regular sleep schedule and aim for 7-9 hours of sleep each night."
            ]
        })
    );
}

#[tokio::test]
async fn score_ignores_client_supplied_category() {
    let answers = json!({
        "answers": [{ "questionId": 1, "selectedValue": 3, "category": "sleep" }]
    });
    let resp = app()
        .oneshot(json_post("/api/quiz/score", answers))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["anxiety"], 100);
    assert_eq!(body["sleep"], 0);
}

#[tokio::test]
async fn invalid_answers_are_rejected() {
    for answers in [
        json!({ "answers": [{ "questionId": 42, "selectedValue": 1 }] }),
        json!({ "answers": [{ "questionId": 1, "selectedValue": 7 }] }),
    ] {
        let resp = app()
            .oneshot(json_post("/api/quiz/score", answers))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn contact_submission_is_created() {
    let resp = app()
        .oneshot(json_post(
            "/api/contact",
            json!({
                "name": "Jane",
                "email": "jane@example.com",
                "subject": "General Inquiry",
                "message": "Hello there"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Jane");
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn contact_with_missing_fields_is_bad_request() {
    let resp = app()
        .oneshot(json_post(
            "/api/contact",
            json!({ "name": "Jane", "email": "jane@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Please select a subject. Message must be at least 10 characters."
    );
}

#[tokio::test]
async fn contact_enforces_field_lengths() {
    let resp = app()
        .oneshot(json_post(
            "/api/contact",
            json!({
                "name": "J",
                "email": "jane@example.com",
                "subject": "General Inquiry",
                "message": "Hi"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["message"],
        "Name must be at least 2 characters. Message must be at least 10 characters."
    );
}

#[tokio::test]
async fn newsletter_rejects_malformed_domain() {
    let resp = app()
        .oneshot(json_post("/api/newsletter", json!({ "email": "a@b..c" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "Invalid email address");
}

#[tokio::test]
async fn newsletter_rejects_duplicates() {
    let app = app();
    let signup = || json_post("/api/newsletter", json!({ "email": "jane@example.com" }));

    let resp = app.clone().oneshot(signup()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["data"]["email"], "jane@example.com");

    let resp = app.clone().oneshot(signup()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(resp).await["message"],
        "Email is already subscribed to the newsletter"
    );

    let resp = app
        .oneshot(json_post("/api/newsletter", json!({ "email": "nope" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chatbot_returns_a_canned_reply() {
    let resp = app()
        .oneshot(json_post("/api/chatbot", json!({ "message": "I feel tired" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn health_and_emotion_status() {
    let resp = app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(body_json(resp).await, json!({ "status": "ok" }));

    let resp = app()
        .oneshot(get("/api/emotion-detection/status"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await, json!({ "available": true }));
}
