use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::{
    extractors::SleepToken,
    handlers::sleep::SleepOwner,
    quiz::{self, Answer, Question, QuizError},
    rejections::{AppError, ResultExt},
    services::{
        contact::{ContactForm, ContactOutcome},
        newsletter::{NewsletterSignup, SubscribeOutcome},
        sleep::{SleepLogForm, SleepOutcome},
    },
    sleep::SleepSummary,
    store::SleepEntry,
    AppState,
};

const CHATBOT_REPLIES: [&str; 4] = [
    "I understand how you're feeling. Would you like to try a quick mindfulness exercise?",
    "Thanks for sharing. Based on your mood patterns, I recommend taking a short break and practicing deep breathing.",
    "I'm here to support you. Would you like me to suggest some personalized coping strategies?",
    "I've noticed a pattern in your mood entries. Would you like to explore what might be triggering these feelings?",
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/quiz/questions", get(quiz_questions))
        .route("/api/quiz/follow-up", post(quiz_follow_up))
        .route("/api/quiz/score", post(quiz_score))
        .route("/api/contact", post(contact))
        .route("/api/newsletter", post(newsletter))
        .route("/api/sleep", get(sleep_log).post(log_sleep))
        .route("/api/chatbot", post(chatbot))
        .route("/api/health", get(health))
        .route("/api/emotion-detection/status", get(emotion_detection_status))
}

#[derive(Serialize)]
struct ApiResponse<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn created<T: Serialize>(data: T) -> Response {
    let body = ApiResponse {
        success: true,
        data: Some(data),
        message: None,
    };
    (StatusCode::CREATED, Json(body)).into_response()
}

fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ApiResponse::<()> {
        success: false,
        data: None,
        message: Some(message.into()),
    };
    (status, Json(body)).into_response()
}

// ---------------------------------------------------------------------------
// Quiz
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerInput {
    question_id: u32,
    selected_value: u8,
}

#[derive(Deserialize)]
struct AnswersBody {
    #[serde(default)]
    answers: Vec<AnswerInput>,
}

impl AnswersBody {
    /// Rebuilds each answer from the bank, so the category always matches the question.
    fn checked(&self) -> Result<Vec<Answer>, QuizError> {
        self.answers
            .iter()
            .map(|a| Answer::for_question(a.question_id, a.selected_value))
            .collect()
    }
}

async fn quiz_questions() -> Json<Vec<&'static Question>> {
    Json(quiz::initial_questions())
}

async fn quiz_follow_up(Json(body): Json<AnswersBody>) -> Response {
    match body.checked() {
        Ok(answers) => Json(quiz::follow_up_questions(&answers)).into_response(),
        Err(e) => failure(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

async fn quiz_score(Json(body): Json<AnswersBody>) -> Response {
    match body.checked() {
        Ok(answers) => Json(quiz::score(&answers)).into_response(),
        Err(e) => failure(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Outreach
// ---------------------------------------------------------------------------

async fn contact(
    State(state): State<AppState>,
    Json(body): Json<ContactForm>,
) -> Result<Response, AppError> {
    let outcome = state
        .contact
        .submit(body)
        .await
        .reject("Failed to submit contact form")?;

    Ok(match outcome {
        ContactOutcome::Received(submission) => created(submission),
        ContactOutcome::Invalid(message) => failure(StatusCode::BAD_REQUEST, message),
    })
}

async fn newsletter(
    State(state): State<AppState>,
    Json(signup): Json<NewsletterSignup>,
) -> Result<Response, AppError> {
    let outcome = state
        .newsletter
        .subscribe(signup)
        .await
        .reject("Failed to subscribe to newsletter")?;

    Ok(match outcome {
        SubscribeOutcome::Subscribed(subscriber) => created(subscriber),
        SubscribeOutcome::AlreadySubscribed => failure(
            StatusCode::CONFLICT,
            "Email is already subscribed to the newsletter",
        ),
        SubscribeOutcome::InvalidEmail => failure(StatusCode::BAD_REQUEST, "Invalid email address"),
    })
}

// ---------------------------------------------------------------------------
// Sleep log
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SleepLog {
    summary: SleepSummary,
    entries: Vec<SleepEntry>,
}

async fn sleep_log(
    State(state): State<AppState>,
    SleepToken(token): SleepToken,
) -> Result<Json<SleepLog>, AppError> {
    let (summary, entries) = match &token {
        Some(token) => state
            .sleep
            .overview(token)
            .await
            .reject("Failed to load sleep log")?,
        None => (crate::sleep::summarize(&[]), Vec::new()),
    };
    Ok(Json(SleepLog { summary, entries }))
}

async fn log_sleep(
    State(state): State<AppState>,
    SleepToken(token): SleepToken,
    Json(form): Json<SleepLogForm>,
) -> Result<Response, AppError> {
    let owner = SleepOwner::from_token(token);
    let outcome = state
        .sleep
        .log(&owner.token, form)
        .await
        .reject("Failed to log sleep")?;

    Ok(match outcome {
        SleepOutcome::Logged(entry) => {
            let headers = owner.cookie_headers(state.secure_cookies)?;
            (headers, created(entry)).into_response()
        }
        SleepOutcome::Invalid(message) => failure(StatusCode::BAD_REQUEST, message),
    })
}

// ---------------------------------------------------------------------------
// Demo widgets
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

#[derive(Serialize)]
struct ChatReply {
    message: &'static str,
}

async fn chatbot(State(state): State<AppState>, Json(body): Json<ChatRequest>) -> Json<ChatReply> {
    tracing::debug!(len = body.message.len(), "chatbot message received");

    if !state.chatbot_delay.is_zero() {
        tokio::time::sleep(state.chatbot_delay).await;
    }

    let message = CHATBOT_REPLIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(CHATBOT_REPLIES[0]);
    Json(ChatReply { message })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn emotion_detection_status(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "available": state.emotion_detection }))
}
