use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::HOME_URL) {
                            strong { "MoodMind" }
                        }
                    }
                }
                ul {
                    li { a href=(names::QUIZ_URL) { (t!("nav.quiz")) } }
                    li { a href=(names::SLEEP_URL) { (t!("nav.sleep")) } }
                    li { a href={ "/#" (names::CONTACT_ANCHOR) } { (t!("nav.contact")) } }
                    li."secondary" { small { (utils::VERSION) } }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())
            (icon())

            title { (format!("{title} - MoodMind")) }
        }

        body."container" {
            (header())
            (main(body))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - MoodMind" }
        (body)
    }
}

/// Full page for normal navigation, bare fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body)
    }
}
