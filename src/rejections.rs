use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};
use rust_i18n::t;

use crate::{names, views};

#[derive(Debug)]
pub enum AppError {
    /// Something failed on our side. The message is logged, never shown.
    Internal(&'static str),
    /// The request was understood but its content is not acceptable.
    Input(String),
    NotFound,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
            AppError::Input(message) => message,
            AppError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(context) = &self {
            tracing::error!("internal error: {context}");
        }
        (self.status(), error_page(self.message())).into_response()
    }
}

pub trait ResultExt<T> {
    /// Logs the underlying error and turns it into [`AppError::Internal`].
    fn reject(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            AppError::Internal(context)
        })
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

fn error_page(message: &str) -> Markup {
    views::page(
        &t!("error.title"),
        html! {
            h1 { (message) }
            a href=(names::HOME_URL) { (t!("error.back_home")) }
        },
    )
}
