use std::collections::HashSet;

use super::bank::{Answer, Category, Question, QUESTION_BANK};

/// Number of questions every session starts with.
pub const INITIAL_QUESTION_COUNT: usize = 5;
/// Upper bound on the follow-up batch.
pub const MAX_FOLLOW_UP_QUESTIONS: usize = 10;
/// How many of the highest-scoring categories the follow-up batch covers.
const FOCUS_CATEGORIES: usize = 2;

/// The fixed opening batch: the lowest ids in the bank.
pub fn initial_questions() -> Vec<&'static Question> {
    QUESTION_BANK.iter().take(INITIAL_QUESTION_COUNT).collect()
}

/// Picks unanswered questions from the two categories with the highest
/// summed answer values so far.
pub fn follow_up_questions(prior_answers: &[Answer]) -> Vec<&'static Question> {
    if prior_answers.is_empty() {
        return initial_questions();
    }

    let focus = focus_categories(prior_answers);
    let answered: HashSet<u32> = prior_answers.iter().map(|a| a.question_id).collect();

    let questions: Vec<_> = QUESTION_BANK
        .iter()
        .filter(|q| focus.contains(&q.category) && !answered.contains(&q.id))
        .take(MAX_FOLLOW_UP_QUESTIONS)
        .collect();

    tracing::debug!(
        ?focus,
        count = questions.len(),
        "selected follow-up questions"
    );
    questions
}

fn focus_categories(answers: &[Answer]) -> Vec<Category> {
    let mut totals = [0u32; Category::ALL.len()];
    for answer in answers {
        totals[answer.category.index()] += u32::from(answer.selected_value);
    }

    let mut ranked: Vec<(Category, u32)> = Category::ALL
        .iter()
        .map(|&c| (c, totals[c.index()]))
        .collect();
    // stable: equal totals keep declaration order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(FOCUS_CATEGORIES)
        .map(|(c, _)| c)
        .collect()
}
