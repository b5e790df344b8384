use axum::{
    extract::{Form, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use maud::Markup;
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    extractors::{IsHtmx, QuizToken},
    names,
    quiz::Step,
    rejections::{AppError, ResultExt},
    utils, views, AppState,
};

use crate::views::quiz as quiz_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZ_URL, get(quiz_page))
        .route(names::START_QUIZ_URL, post(start_quiz))
        .route(names::SUBMIT_ANSWER_URL, post(submit_answer))
        .route(names::RESULTS_URL, get(results_page))
}

#[derive(Deserialize)]
struct AnswerPost {
    question_id: u32,
    value: u8,
}

async fn quiz_page(IsHtmx(is_htmx): IsHtmx) -> Markup {
    views::render(is_htmx, &t!("quiz.title"), quiz_views::intro_page())
}

async fn start_quiz(
    State(state): State<AppState>,
    QuizToken(previous): QuizToken,
) -> Result<Response, AppError> {
    if let Some(previous) = previous {
        state.sessions.remove(&previous);
    }

    let token = state.sessions.create();
    let (question, (answered, total)) = state
        .sessions
        .with_session(&token, |s| (s.current_question(), s.progress()))
        .ok_or(AppError::Internal("new quiz session was evicted"))?;
    let question = question.ok_or(AppError::Internal("quiz session has no questions"))?;

    let cookie = utils::cookie(
        names::QUIZ_SESSION_COOKIE_NAME,
        &token,
        names::QUIZ_SESSION_MAX_AGE_SECS,
        state.secure_cookies,
    );
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        cookie
            .parse::<HeaderValue>()
            .reject("could not build quiz session cookie")?,
    );

    let page = views::titled(
        &t!("quiz.title"),
        quiz_views::question(question, answered, total),
    );
    Ok((headers, page).into_response())
}

async fn submit_answer(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
    Form(body): Form<AnswerPost>,
) -> Result<Response, AppError> {
    let Some(token) = token else {
        return Ok(expired());
    };

    let outcome = state.sessions.with_session(&token, |session| {
        session
            .answer(body.question_id, body.value)
            .map(|step| (step, session.progress()))
    });

    let Some(outcome) = outcome else {
        tracing::info!("answer for unknown quiz session {token}");
        return Ok(expired());
    };

    let (step, (answered, total)) = outcome.map_err(|e| {
        tracing::warn!("rejected quiz answer for session {token}: {e}");
        AppError::Input(e.to_string())
    })?;

    match step {
        Step::Next(question) => Ok(views::titled(
            &t!("quiz.title"),
            quiz_views::question(question, answered, total),
        )
        .into_response()),
        Step::Finished(result) => {
            tracing::info!(
                "quiz session {token} finished: overall={} state={}",
                result.overall_score,
                result.mental_state.as_str()
            );
            let mut headers = HeaderMap::new();
            headers.insert("HX-Push-Url", HeaderValue::from_static(names::RESULTS_URL));
            let page = views::titled(&t!("quiz.results_title"), quiz_views::results(&result));
            Ok((headers, page).into_response())
        }
    }
}

async fn results_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    QuizToken(token): QuizToken,
) -> Response {
    let result = token.and_then(|token| {
        state
            .sessions
            .with_session(&token, |s| s.result().cloned())
            .flatten()
    });

    match result {
        Some(result) => views::render(
            is_htmx,
            &t!("quiz.results_title"),
            quiz_views::results(&result),
        )
        .into_response(),
        None => Redirect::to(names::QUIZ_URL).into_response(),
    }
}

fn expired() -> Response {
    views::titled(&t!("quiz.title"), quiz_views::expired()).into_response()
}
