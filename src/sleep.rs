//! Sleep log arithmetic: durations across midnight, the per-night score and
//! recommendations drawn from a run of nights.
//!
//! Everything here is pure; storage and ownership of the log live in
//! [`crate::store`] and [`crate::services::sleep`].

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::store::SleepEntry;

pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 10;
pub const MAX_RECOMMENDATIONS: usize = 5;

const MINUTES_PER_DAY: i64 = 24 * 60;
/// Bedtimes further apart than this count as an irregular schedule.
const BEDTIME_SPREAD_LIMIT: i64 = 90;

pub const START_TRACKING_TIP: &str =
    "Start tracking your sleep to get personalized recommendations";
const SHORT_SLEEP_TIP: &str =
    "Try to increase your sleep duration. Aim for 7-9 hours of sleep each night.";
const LONG_SLEEP_TIP: &str =
    "You may be oversleeping. Try to maintain a more consistent sleep schedule.";
const LOW_QUALITY_TIPS: [&str; 3] = [
    "Your sleep quality could be improved. Consider creating a relaxing bedtime routine.",
    "Limit screen time 1-2 hours before bed to improve sleep quality.",
    "Make sure your bedroom is dark, quiet, and at a comfortable temperature.",
];
const IRREGULAR_BEDTIME_TIP: &str =
    "Your bedtime varies considerably. Try to maintain a more consistent sleep schedule.";
const FILLER_TIPS: [&str; 4] = [
    "Practice relaxation techniques like deep breathing before bed.",
    "Exercise regularly, but avoid intense workouts close to bedtime.",
    "Create a comfortable sleep environment with minimal light and noise.",
    "Avoid caffeine and large meals in the evening.",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SleepError {
    #[error("{0:?} is not a time of day (HH:MM)")]
    InvalidTime(String),
    #[error("sleep quality must be between 1 and 10, got {0}")]
    QualityOutOfRange(u8),
}

/// Parses a `HH:MM` clock reading.
pub fn parse_clock(value: &str) -> Result<NaiveTime, SleepError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| SleepError::InvalidTime(value.to_string()))
}

/// Hours slept, to two decimals. A wake time at or before the bedtime is
/// taken to be on the next day.
pub fn duration_hours(bed: NaiveTime, wake: NaiveTime) -> f64 {
    let minutes = wake
        .signed_duration_since(bed)
        .num_minutes()
        .rem_euclid(MINUTES_PER_DAY);
    (minutes as f64 / 60.0 * 100.0).round() / 100.0
}

/// 40% duration (4h scores 0, 10h and more score 100) and 60% quality.
pub fn sleep_score(duration: f64, quality: u8) -> Result<u8, SleepError> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(SleepError::QualityOutOfRange(quality));
    }
    let duration_score = ((duration - 4.0) / 6.0 * 100.0).clamp(0.0, 100.0);
    let quality_score = f64::from(quality) * 10.0;
    Ok((duration_score * 0.4 + quality_score * 0.6).round() as u8)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SleepRating {
    Excellent,
    Average,
    Poor,
}

impl SleepRating {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            SleepRating::Excellent
        } else if score >= 60 {
            SleepRating::Average
        } else {
            SleepRating::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SleepRating::Excellent => "Excellent Sleep Quality",
            SleepRating::Average => "Average Sleep Quality",
            SleepRating::Poor => "Poor Sleep Quality",
        }
    }
}

/// Minutes after noon, so 23:30 and 00:30 sit an hour apart.
fn bedtime_minutes(bed: NaiveTime) -> i64 {
    let minutes = i64::from(bed.num_seconds_from_midnight() / 60);
    if minutes < MINUTES_PER_DAY / 2 {
        minutes + MINUTES_PER_DAY
    } else {
        minutes
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// At most five tips for the nights logged so far.
pub fn recommendations(entries: &[SleepEntry]) -> Vec<&'static str> {
    let (Some(avg_duration), Some(avg_quality)) = (
        mean(entries.iter().map(|e| e.duration)),
        mean(entries.iter().map(|e| f64::from(e.quality))),
    ) else {
        return vec![START_TRACKING_TIP];
    };

    let mut tips = Vec::new();
    if avg_duration < 7.0 {
        tips.push(SHORT_SLEEP_TIP);
    } else if avg_duration > 9.0 {
        tips.push(LONG_SLEEP_TIP);
    }

    if avg_quality < 6.0 {
        tips.extend(LOW_QUALITY_TIPS);
    }

    let bedtimes = entries.iter().map(|e| bedtime_minutes(e.bed_time));
    let spread = bedtimes.clone().max().unwrap_or(0) - bedtimes.min().unwrap_or(0);
    if spread > BEDTIME_SPREAD_LIMIT {
        tips.push(IRREGULAR_BEDTIME_TIP);
    }

    if tips.len() < 3 {
        tips.extend(FILLER_TIPS);
    }
    tips.truncate(MAX_RECOMMENDATIONS);
    tips
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSummary {
    pub nights: usize,
    pub average_score: u8,
    pub average_duration: f64,
    pub average_quality: f64,
    pub rating: SleepRating,
    pub recommendations: Vec<&'static str>,
}

pub fn summarize(entries: &[SleepEntry]) -> SleepSummary {
    let average_score = mean(entries.iter().map(|e| f64::from(e.sleep_score)))
        .map_or(0, |avg| avg.round() as u8);
    let one_decimal = |v: f64| (v * 10.0).round() / 10.0;

    SleepSummary {
        nights: entries.len(),
        average_score,
        average_duration: mean(entries.iter().map(|e| e.duration)).map_or(0.0, one_decimal),
        average_quality: mean(entries.iter().map(|e| f64::from(e.quality)))
            .map_or(0.0, one_decimal),
        rating: SleepRating::from_score(average_score),
        recommendations: recommendations(entries),
    }
}

/// Serializes a clock time as `HH:MM`.
pub fn serialize_clock<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%H:%M"))
}
