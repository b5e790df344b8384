use serde::Serialize;

use super::bank::{Answer, Category, MAX_OPTION_VALUE};

pub const GENERAL_TIP: &str =
    "Maintain a regular sleep schedule and aim for 7-9 hours of sleep each night.";
pub const PROFESSIONAL_TIP: &str =
    "Consider speaking with a mental health professional for personalized support and guidance.";

/// Category scores above this (below, for wellbeing) add that category's tips.
/// Only categories with at least one answer are considered.
const CATEGORY_THRESHOLD: u8 = 50;
/// Overall scores above this add the professional-consult tip.
const PROFESSIONAL_THRESHOLD: f64 = 70.0;

fn category_tips(category: Category) -> [&'static str; 2] {
    match category {
        Category::Anxiety => [
            "Practice deep breathing exercises daily to help manage anxiety symptoms.",
            "Consider limiting caffeine intake, which can exacerbate anxiety.",
        ],
        Category::Depression => [
            "Try to engage in physical activity for at least 30 minutes daily.",
            "Schedule activities that bring you joy and satisfaction.",
        ],
        Category::Stress => [
            "Practice mindfulness meditation to help reduce stress levels.",
            "Set realistic goals and prioritize your tasks to avoid feeling overwhelmed.",
        ],
        Category::Wellbeing => [
            "Connect with supportive friends or family members regularly.",
            "Engage in activities that give you a sense of meaning and purpose.",
        ],
        Category::Sleep => [
            "Create a relaxing bedtime routine that helps signal your body it's time to sleep.",
            "Limit screen time at least one hour before bed.",
        ],
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MentalState {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MentalState {
    pub fn from_overall(overall: f64) -> Self {
        if overall < 25.0 {
            MentalState::Excellent
        } else if overall < 50.0 {
            MentalState::Good
        } else if overall < 75.0 {
            MentalState::Fair
        } else {
            MentalState::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MentalState::Excellent => "Excellent",
            MentalState::Good => "Good",
            MentalState::Fair => "Fair",
            MentalState::Poor => "Poor",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub anxiety: u8,
    pub depression: u8,
    pub stress: u8,
    pub wellbeing: u8,
    pub sleep: u8,
    pub overall_score: u8,
    pub mental_state: MentalState,
    pub recommendations: Vec<&'static str>,
}

impl QuizResult {
    pub fn category(&self, category: Category) -> u8 {
        match category {
            Category::Anxiety => self.anxiety,
            Category::Depression => self.depression,
            Category::Stress => self.stress,
            Category::Wellbeing => self.wellbeing,
            Category::Sleep => self.sleep,
        }
    }
}

/// Turns a full answer sequence into per-category scores, a label and tips.
pub fn score(answers: &[Answer]) -> QuizResult {
    let mut totals = [(0u32, 0u32); Category::ALL.len()];
    for answer in answers {
        let (sum, count) = &mut totals[answer.category.index()];
        *sum += u32::from(answer.selected_value);
        *count += 1;
    }

    let scores = totals.map(|(sum, count)| normalize(sum, count));
    let overall = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64;

    let mut recommendations = vec![GENERAL_TIP];
    for category in Category::ALL {
        let (_, count) = totals[category.index()];
        if count == 0 {
            continue;
        }
        let score = scores[category.index()];
        let needs_attention = match category {
            Category::Wellbeing => score < CATEGORY_THRESHOLD,
            _ => score > CATEGORY_THRESHOLD,
        };
        if needs_attention {
            recommendations.extend(category_tips(category));
        }
    }
    if overall > PROFESSIONAL_THRESHOLD {
        recommendations.push(PROFESSIONAL_TIP);
    }

    QuizResult {
        anxiety: scores[Category::Anxiety.index()],
        depression: scores[Category::Depression.index()],
        stress: scores[Category::Stress.index()],
        wellbeing: scores[Category::Wellbeing.index()],
        sleep: scores[Category::Sleep.index()],
        overall_score: overall.round() as u8,
        mental_state: MentalState::from_overall(overall),
        recommendations,
    }
}

/// Percentage of the maximum possible severity, 0 when nothing was answered.
fn normalize(sum: u32, count: u32) -> u8 {
    if count == 0 {
        return 0;
    }
    let max = f64::from(u32::from(MAX_OPTION_VALUE) * count);
    ((f64::from(sum) / max) * 100.0).round() as u8
}
