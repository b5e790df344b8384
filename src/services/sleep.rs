use chrono::{NaiveDate, Utc};
use color_eyre::Result;
use validator::Validate;

use crate::{
    sleep::{self, SleepSummary},
    store::{NewSleepEntry, SleepEntry, Store},
};

// ---------------------------------------------------------------------------
// SleepRepository trait
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait SleepRepository: Send + Sync {
    fn add_sleep_entry(
        &self,
        owner: &str,
        new: NewSleepEntry,
    ) -> impl std::future::Future<Output = Result<SleepEntry>> + Send;

    fn sleep_entries(
        &self,
        owner: &str,
    ) -> impl std::future::Future<Output = Result<Vec<SleepEntry>>> + Send;
}

impl SleepRepository for Store {
    async fn add_sleep_entry(&self, owner: &str, new: NewSleepEntry) -> Result<SleepEntry> {
        Store::add_sleep_entry(self, owner, new).await
    }

    async fn sleep_entries(&self, owner: &str) -> Result<Vec<SleepEntry>> {
        Store::sleep_entries(self, owner).await
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One night as typed into the log form. An empty date means today.
#[derive(Clone, Debug, Default, serde::Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SleepLogForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub bed_time: String,
    #[serde(default)]
    pub wake_time: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 10, message = "Sleep quality must be between 1 and 10."))]
    pub quality: u8,
    #[serde(default)]
    #[validate(length(max = 500, message = "Notes must be at most 500 characters."))]
    pub notes: String,
}

pub enum SleepOutcome {
    Logged(SleepEntry),
    /// Carries a message for the visitor.
    Invalid(String),
}

impl SleepLogForm {
    fn to_new_entry(&self) -> std::result::Result<NewSleepEntry, String> {
        let date = match self.date.trim() {
            "" => Utc::now().date_naive(),
            date => NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| "Date must look like YYYY-MM-DD.".to_string())?,
        };
        let bed_time = sleep::parse_clock(&self.bed_time)
            .map_err(|_| "Bed time must be a time of day (HH:MM).".to_string())?;
        let wake_time = sleep::parse_clock(&self.wake_time)
            .map_err(|_| "Wake time must be a time of day (HH:MM).".to_string())?;

        let duration = sleep::duration_hours(bed_time, wake_time);
        let sleep_score = sleep::sleep_score(duration, self.quality).map_err(|e| e.to_string())?;

        Ok(NewSleepEntry {
            date,
            bed_time,
            wake_time,
            duration,
            quality: self.quality,
            notes: self.notes.trim().to_string(),
            sleep_score,
        })
    }
}

// ---------------------------------------------------------------------------
// SleepService
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct SleepService<R: SleepRepository = Store> {
    repo: R,
}

impl<R: SleepRepository> SleepService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Scores the night and appends it to `owner`'s log.
    pub async fn log(&self, owner: &str, form: SleepLogForm) -> Result<SleepOutcome> {
        if let Err(errors) = form.validate() {
            let message = super::validation_message(&errors, &["quality", "notes"]);
            return Ok(SleepOutcome::Invalid(message));
        }

        let new = match form.to_new_entry() {
            Ok(new) => new,
            Err(message) => return Ok(SleepOutcome::Invalid(message)),
        };

        let entry = self.repo.add_sleep_entry(owner, new).await?;
        tracing::debug!(
            duration = entry.duration,
            score = entry.sleep_score,
            "night logged"
        );
        Ok(SleepOutcome::Logged(entry))
    }

    /// `owner`'s summary together with the nights it was built from.
    pub async fn overview(&self, owner: &str) -> Result<(SleepSummary, Vec<SleepEntry>)> {
        let entries = self.repo.sleep_entries(owner).await?;
        Ok((sleep::summarize(&entries), entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SleepLogForm {
        SleepLogForm {
            date: "2024-06-01".to_string(),
            bed_time: "23:30".to_string(),
            wake_time: "06:45".to_string(),
            quality: 7,
            notes: " Read before bed ".to_string(),
        }
    }

    fn stored(new: NewSleepEntry) -> SleepEntry {
        SleepEntry {
            id: 1,
            date: new.date,
            bed_time: new.bed_time,
            wake_time: new.wake_time,
            duration: new.duration,
            quality: new.quality,
            notes: new.notes,
            sleep_score: new.sleep_score,
        }
    }

    async fn rejected(input: SleepLogForm) -> String {
        let mut mock = MockSleepRepository::new();
        mock.expect_add_sleep_entry().never();

        match SleepService::new(mock).log("owner", input).await.unwrap() {
            SleepOutcome::Invalid(message) => message,
            SleepOutcome::Logged(_) => panic!("night should be rejected"),
        }
    }

    #[tokio::test]
    async fn logs_scored_night_for_owner() {
        let mut mock = MockSleepRepository::new();
        mock.expect_add_sleep_entry()
            .withf(|owner, new| {
                owner == "owner"
                    && new.duration == 7.25
                    && new.sleep_score == 64
                    && new.notes == "Read before bed"
            })
            .times(1)
            .returning(|_, new| Box::pin(async move { Ok(stored(new)) }));

        let outcome = SleepService::new(mock).log("owner", form()).await.unwrap();
        assert!(matches!(outcome, SleepOutcome::Logged(ref e) if e.duration == 7.25));
    }

    #[tokio::test]
    async fn empty_date_means_today() {
        let today = Utc::now().date_naive();
        let mut mock = MockSleepRepository::new();
        mock.expect_add_sleep_entry()
            .withf(move |_, new| new.date == today)
            .returning(|_, new| Box::pin(async move { Ok(stored(new)) }));

        let mut input = form();
        input.date.clear();
        let outcome = SleepService::new(mock).log("owner", input).await.unwrap();
        assert!(matches!(outcome, SleepOutcome::Logged(_)));
    }

    #[tokio::test]
    async fn quality_must_be_one_to_ten() {
        for quality in [0, 11] {
            let mut input = form();
            input.quality = quality;
            assert_eq!(rejected(input).await, "Sleep quality must be between 1 and 10.");
        }
    }

    #[tokio::test]
    async fn malformed_times_and_dates_are_rejected() {
        let mut input = form();
        input.bed_time = "late".to_string();
        assert_eq!(rejected(input).await, "Bed time must be a time of day (HH:MM).");

        let mut input = form();
        input.wake_time = "25:00".to_string();
        assert_eq!(rejected(input).await, "Wake time must be a time of day (HH:MM).");

        let mut input = form();
        input.date = "01/06/2024".to_string();
        assert_eq!(rejected(input).await, "Date must look like YYYY-MM-DD.");
    }

    #[tokio::test]
    async fn long_notes_are_rejected() {
        let mut input = form();
        input.notes = "z".repeat(501);
        assert_eq!(rejected(input).await, "Notes must be at most 500 characters.");
    }

    #[tokio::test]
    async fn summary_covers_owner_entries() {
        let mut mock = MockSleepRepository::new();
        mock.expect_sleep_entries()
            .withf(|owner| owner == "owner")
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        let (summary, entries) = SleepService::new(mock).overview("owner").await.unwrap();
        assert!(entries.is_empty());
        assert_eq!(summary.nights, 0);
        assert_eq!(summary.recommendations, vec![sleep::START_TRACKING_TIP]);
    }
}
