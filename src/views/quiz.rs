use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    names,
    quiz::{Category, Question, QuizResult},
    views::components,
};

fn category_label(category: Category) -> String {
    match category {
        Category::Anxiety => t!("category.anxiety"),
        Category::Depression => t!("category.depression"),
        Category::Stress => t!("category.stress"),
        Category::Wellbeing => t!("category.wellbeing"),
        Category::Sleep => t!("category.sleep"),
    }
    .to_string()
}

fn start_button() -> Markup {
    html! {
        button hx-post=(names::START_QUIZ_URL)
               hx-target="main"
               hx-swap="innerHTML" {
            (t!("quiz.start"))
        }
    }
}

pub fn intro_page() -> Markup {
    html! {
        h1 { (t!("quiz.title")) }
        p { (t!("quiz.intro")) }
        article {
            header {
                h3 { (t!("quiz.how_title")) }
                small { (t!("quiz.how_desc")) }
            }
            ol {
                li {
                    strong { (t!("quiz.step_initial_title")) }
                    p { (t!("quiz.step_initial_desc")) }
                }
                li {
                    strong { (t!("quiz.step_adaptive_title")) }
                    p { (t!("quiz.step_adaptive_desc")) }
                }
                li {
                    strong { (t!("quiz.step_results_title")) }
                    p { (t!("quiz.step_results_desc")) }
                }
            }
            footer {
                small { (t!("quiz.disclaimer")) }
            }
        }
        (start_button())
    }
}

pub fn expired() -> Markup {
    html! {
        p { (t!("quiz.expired")) }
        (start_button())
    }
}

/// One question with a submit button per option. `answered` and `total`
/// drive the progress bar; `total` grows once follow-ups are added.
pub fn question(question: &Question, answered: usize, total: usize) -> Markup {
    html! {
        article.quiz-question {
            header {
                small { (category_label(question.category)) }
                p {
                    (t!("quiz.question_progress", current = answered + 1, total = total))
                }
                progress value=(answered) max=(total) {}
            }
            h2 { (question.text) }
            form hx-post=(names::SUBMIT_ANSWER_URL)
                 hx-target="main"
                 hx-swap="innerHTML" {
                input type="hidden" name="question_id" value=(question.id);
                div.quiz-options {
                    @for option in question.options {
                        button type="submit" name="value" value=(option.value) class="outline" {
                            (option.text)
                        }
                    }
                }
            }
        }
    }
}

pub fn results(result: &QuizResult) -> Markup {
    html! {
        h1 { (t!("quiz.results_title")) }
        article.quiz-summary {
            p {
                (t!("quiz.overall")) ": "
                strong { (result.overall_score) "%" }
            }
            p {
                (t!("quiz.state")) ": "
                mark { (result.mental_state.as_str()) }
            }
        }
        article {
            h3 { (t!("quiz.breakdown")) }
            @for category in Category::ALL {
                (components::score_bar(&category_label(category), result.category(category)))
            }
        }
        article {
            h3 { (t!("quiz.recommendations")) }
            ul {
                @for tip in &result.recommendations {
                    li { (tip) }
                }
            }
            footer {
                small { (t!("quiz.disclaimer")) }
            }
        }
        button hx-post=(names::START_QUIZ_URL)
               hx-target="main"
               hx-swap="innerHTML"
               class="secondary" {
            (t!("quiz.retake"))
        }
    }
}
