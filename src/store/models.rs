// Stored record structs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Subscriber {
    pub id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new contact submission.
#[derive(Clone, Debug)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One logged night.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepEntry {
    pub id: i32,
    pub date: NaiveDate,
    #[serde(serialize_with = "crate::sleep::serialize_clock")]
    pub bed_time: NaiveTime,
    #[serde(serialize_with = "crate::sleep::serialize_clock")]
    pub wake_time: NaiveTime,
    /// Hours, two decimals.
    pub duration: f64,
    pub quality: u8,
    pub notes: String,
    pub sleep_score: u8,
}

/// A night with its duration and score already worked out.
#[derive(Clone, Debug, PartialEq)]
pub struct NewSleepEntry {
    pub date: NaiveDate,
    pub bed_time: NaiveTime,
    pub wake_time: NaiveTime,
    pub duration: f64,
    pub quality: u8,
    pub notes: String,
    pub sleep_score: u8,
}
