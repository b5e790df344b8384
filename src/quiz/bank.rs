use serde::{Deserialize, Serialize};

use super::QuizError;

/// Highest value any option can carry.
pub const MAX_OPTION_VALUE: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Anxiety,
    Depression,
    Stress,
    Wellbeing,
    Sleep,
}

impl Category {
    /// All categories in declaration order. Ranking ties and recommendation
    /// blocks both follow this order.
    pub const ALL: [Category; 5] = [
        Category::Anxiety,
        Category::Depression,
        Category::Stress,
        Category::Wellbeing,
        Category::Sleep,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Anxiety => "anxiety",
            Category::Depression => "depression",
            Category::Stress => "stress",
            Category::Wellbeing => "wellbeing",
            Category::Sleep => "sleep",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub value: u8,
    pub text: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub category: Category,
    pub options: &'static [QuizOption],
}

impl Question {
    pub fn accepts(&self, value: u8) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

/// A recorded answer. The category is copied from the question when the
/// answer is built so scoring never has to look the question up again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    pub selected_value: u8,
    pub category: Category,
}

impl Answer {
    /// Builds an answer for `question`, checking that `value` is one of its options.
    pub fn new(question: &Question, value: u8) -> Result<Self, QuizError> {
        if !question.accepts(value) {
            return Err(QuizError::InvalidOption {
                question_id: question.id,
                value,
            });
        }
        Ok(Self {
            question_id: question.id,
            selected_value: value,
            category: question.category,
        })
    }

    /// Looks `question_id` up in the bank and builds a checked answer for it.
    pub fn for_question(question_id: u32, value: u8) -> Result<Self, QuizError> {
        let question = find(question_id).ok_or(QuizError::UnknownQuestion(question_id))?;
        Self::new(question, value)
    }
}

const FREQUENCY: &[QuizOption] = &[
    QuizOption { value: 0, text: "Not at all" },
    QuizOption { value: 1, text: "Several days" },
    QuizOption { value: 2, text: "More than half the days" },
    QuizOption { value: 3, text: "Nearly every day" },
];

const FREQUENCY_INVERTED: &[QuizOption] = &[
    QuizOption { value: 3, text: "Not at all" },
    QuizOption { value: 2, text: "Several days" },
    QuizOption { value: 1, text: "More than half the days" },
    QuizOption { value: 0, text: "Nearly every day" },
];

const DIFFICULTY: &[QuizOption] = &[
    QuizOption { value: 0, text: "Not difficult at all" },
    QuizOption { value: 1, text: "Somewhat difficult" },
    QuizOption { value: 2, text: "Very difficult" },
    QuizOption { value: 3, text: "Extremely difficult" },
];

const OCCURRENCE: &[QuizOption] = &[
    QuizOption { value: 0, text: "Never" },
    QuizOption { value: 1, text: "Sometimes" },
    QuizOption { value: 2, text: "Often" },
    QuizOption { value: 3, text: "Very often" },
];

/// The full catalog, ordered by ascending id.
pub static QUESTION_BANK: [Question; 15] = [
    Question {
        id: 1,
        text: "How often do you feel nervous, anxious, or on edge?",
        category: Category::Anxiety,
        options: FREQUENCY,
    },
    Question {
        id: 2,
        text: "How often do you find yourself worrying too much about different things?",
        category: Category::Anxiety,
        options: FREQUENCY,
    },
    Question {
        id: 3,
        text: "How difficult is it for you to relax?",
        category: Category::Anxiety,
        options: DIFFICULTY,
    },
    Question {
        id: 4,
        text: "How often do you feel down, depressed, or hopeless?",
        category: Category::Depression,
        options: FREQUENCY,
    },
    Question {
        id: 5,
        text: "How often do you have little interest or pleasure in doing things you usually enjoy?",
        category: Category::Depression,
        options: FREQUENCY,
    },
    Question {
        id: 6,
        text: "How often do you feel tired or have little energy?",
        category: Category::Depression,
        options: FREQUENCY,
    },
    Question {
        id: 7,
        text: "How often do you feel unable to control the important things in your life?",
        category: Category::Stress,
        options: OCCURRENCE,
    },
    Question {
        id: 8,
        text: "How often do you feel that difficulties are piling up so high that you cannot overcome them?",
        category: Category::Stress,
        options: OCCURRENCE,
    },
    Question {
        id: 9,
        text: "How often do you feel stressed or overwhelmed?",
        category: Category::Stress,
        options: OCCURRENCE,
    },
    Question {
        id: 10,
        text: "How often do you feel optimistic about the future?",
        category: Category::Wellbeing,
        options: FREQUENCY_INVERTED,
    },
    Question {
        id: 11,
        text: "How often do you feel good about yourself?",
        category: Category::Wellbeing,
        options: FREQUENCY_INVERTED,
    },
    Question {
        id: 12,
        text: "How often do you feel loved?",
        category: Category::Wellbeing,
        options: FREQUENCY_INVERTED,
    },
    Question {
        id: 13,
        text: "How often do you have trouble falling or staying asleep?",
        category: Category::Sleep,
        options: FREQUENCY,
    },
    Question {
        id: 14,
        text: "How often do you wake up feeling rested?",
        category: Category::Sleep,
        options: FREQUENCY_INVERTED,
    },
    Question {
        id: 15,
        text: "How often do you have trouble concentrating on things due to poor sleep?",
        category: Category::Sleep,
        options: FREQUENCY,
    },
];

pub fn find(id: u32) -> Option<&'static Question> {
    QUESTION_BANK.iter().find(|q| q.id == id)
}
