use maud::{html, Markup};

/// Titled card used for feature, privacy and outcome blurbs.
pub fn card(title: &str, body: &str) -> Markup {
    html! {
        article {
            h3 { (title) }
            p { (body) }
        }
    }
}

/// Labelled horizontal bar for a 0-100 score.
pub fn score_bar(label: &str, score: u8) -> Markup {
    html! {
        div.score-bar {
            span.score-bar-label { (label) }
            progress value=(score) max="100" {}
            span.score-bar-value { (score) "%" }
        }
    }
}
