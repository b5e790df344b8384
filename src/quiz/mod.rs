//! Adaptive mental-health quiz: a static question bank, a selector that
//! picks follow-up questions from interim answers, and a scorer.
//!
//! The selector and scorer are pure functions; a [`QuizSession`] ties them
//! together for one attempt and is owned by the caller.

pub mod bank;
pub mod scorer;
pub mod selector;
pub mod session;

pub use bank::{Answer, Category, Question, QuizOption, QUESTION_BANK};
pub use scorer::{score, MentalState, QuizResult};
pub use selector::{follow_up_questions, initial_questions};
pub use session::{QuizSession, Step};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("question {0} does not exist")]
    UnknownQuestion(u32),
    #[error("{value} is not an option of question {question_id}")]
    InvalidOption { question_id: u32, value: u8 },
    #[error("expected an answer to question {expected}, got {got}")]
    OutOfTurn { expected: u32, got: u32 },
    #[error("quiz is already finished")]
    Finished,
}
