use axum::{
    extract::{Form, State},
    routing::{get, post},
    Router,
};
use maud::Markup;
use rust_i18n::t;

use crate::{
    extractors::IsHtmx,
    names,
    rejections::{AppError, ResultExt},
    services::{
        contact::{ContactForm, ContactOutcome},
        newsletter::{NewsletterSignup, SubscribeOutcome},
    },
    views, AppState,
};

use crate::views::homepage as homepage_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::HOME_URL, get(homepage))
        .route(names::CONTACT_URL, post(contact_post))
        .route(names::NEWSLETTER_URL, post(newsletter_post))
}

async fn homepage(IsHtmx(is_htmx): IsHtmx) -> Markup {
    views::render(is_htmx, &t!("nav.home"), homepage_views::landing_page())
}

async fn contact_post(
    State(state): State<AppState>,
    Form(body): Form<ContactForm>,
) -> Result<Markup, AppError> {
    let outcome = state
        .contact
        .submit(body)
        .await
        .reject("could not store contact submission")?;

    Ok(match outcome {
        ContactOutcome::Received(_) => homepage_views::contact_sent(),
        ContactOutcome::Invalid(message) => homepage_views::contact_form(Some(&message)),
    })
}

async fn newsletter_post(
    State(state): State<AppState>,
    Form(signup): Form<NewsletterSignup>,
) -> Result<Markup, AppError> {
    use homepage_views::NewsletterState;

    let outcome = state
        .newsletter
        .subscribe(signup)
        .await
        .reject("could not store newsletter subscription")?;

    let view_state = match outcome {
        SubscribeOutcome::Subscribed(_) => NewsletterState::Subscribed,
        SubscribeOutcome::AlreadySubscribed => NewsletterState::AlreadySubscribed,
        SubscribeOutcome::InvalidEmail => NewsletterState::InvalidEmail,
    };

    Ok(homepage_views::newsletter_result(view_state))
}
