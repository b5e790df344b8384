use super::{
    bank::{Answer, Question},
    scorer::{self, QuizResult},
    selector::{self, INITIAL_QUESTION_COUNT},
    QuizError,
};

/// What happened after an answer was recorded.
#[derive(Debug, PartialEq)]
pub enum Step {
    Next(&'static Question),
    Finished(QuizResult),
}

/// One quiz attempt. Owned by whoever drives the quiz; nothing here is shared.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<&'static Question>,
    answers: Vec<Answer>,
    result: Option<QuizResult>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            questions: selector::initial_questions(),
            answers: Vec::new(),
            result: None,
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.questions.get(self.answers.len()).copied()
    }

    /// `(answered, total selected so far)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.questions.len())
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn answer(&mut self, question_id: u32, value: u8) -> Result<Step, QuizError> {
        let question = self.current_question().ok_or(QuizError::Finished)?;
        if question.id != question_id {
            return Err(QuizError::OutOfTurn {
                expected: question.id,
                got: question_id,
            });
        }

        self.answers.push(Answer::new(question, value)?);

        if self.answers.len() == INITIAL_QUESTION_COUNT {
            let follow_up = selector::follow_up_questions(&self.answers);
            tracing::debug!(count = follow_up.len(), "extending quiz with follow-up questions");
            self.questions.extend(follow_up);
        }

        match self.current_question() {
            Some(next) => Ok(Step::Next(next)),
            None => {
                let result = scorer::score(&self.answers);
                self.result = Some(result.clone());
                Ok(Step::Finished(result))
            }
        }
    }
}
