// Storage module - in-memory records standing in for a database

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use color_eyre::Result;
use tokio::sync::RwLock;

pub mod models;
pub use models::*;

#[derive(Default)]
struct Tables {
    contacts: Vec<ContactSubmission>,
    subscribers: Vec<Subscriber>,
    // keyed by the owner's sleep log token
    sleep_logs: HashMap<String, Vec<SleepEntry>>,
    next_contact_id: i32,
    next_subscriber_id: i32,
    next_sleep_id: i32,
}

// Shared storage handle
#[derive(Clone, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_contact_submission(&self, new: NewContact) -> Result<ContactSubmission> {
        let mut tables = self.tables.write().await;
        tables.next_contact_id += 1;

        let submission = ContactSubmission {
            id: tables.next_contact_id,
            name: new.name,
            email: new.email,
            subject: new.subject,
            message: new.message,
            created_at: Utc::now(),
        };
        tables.contacts.push(submission.clone());

        tracing::info!("contact submission stored: id={}", submission.id);
        Ok(submission)
    }

    pub async fn contact_submissions(&self) -> Result<Vec<ContactSubmission>> {
        Ok(self.tables.read().await.contacts.clone())
    }

    /// Adds `email` to the newsletter list. Returns `None` if it is already there.
    pub async fn subscribe(&self, email: &str) -> Result<Option<Subscriber>> {
        let mut tables = self.tables.write().await;
        if tables.subscribers.iter().any(|s| s.email == email) {
            return Ok(None);
        }
        tables.next_subscriber_id += 1;

        let subscriber = Subscriber {
            id: tables.next_subscriber_id,
            email: email.to_string(),
            created_at: Utc::now(),
        };
        tables.subscribers.push(subscriber.clone());

        tracing::info!("newsletter subscriber stored: id={}", subscriber.id);
        Ok(Some(subscriber))
    }

    pub async fn subscribers(&self) -> Result<Vec<Subscriber>> {
        Ok(self.tables.read().await.subscribers.clone())
    }

    pub async fn add_sleep_entry(&self, owner: &str, new: NewSleepEntry) -> Result<SleepEntry> {
        let mut tables = self.tables.write().await;
        tables.next_sleep_id += 1;

        let entry = SleepEntry {
            id: tables.next_sleep_id,
            date: new.date,
            bed_time: new.bed_time,
            wake_time: new.wake_time,
            duration: new.duration,
            quality: new.quality,
            notes: new.notes,
            sleep_score: new.sleep_score,
        };
        tables
            .sleep_logs
            .entry(owner.to_string())
            .or_default()
            .push(entry.clone());

        tracing::info!("sleep entry stored: id={}", entry.id);
        Ok(entry)
    }

    /// Entries of one sleep log in the order they were logged.
    pub async fn sleep_entries(&self, owner: &str) -> Result<Vec<SleepEntry>> {
        Ok(self
            .tables
            .read()
            .await
            .sleep_logs
            .get(owner)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            email: "a@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn contact_ids_start_at_one_and_increase() {
        let store = Store::new();
        let first = store.create_contact_submission(contact("a")).await.unwrap();
        let second = store.create_contact_submission(contact("b")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let all = store.contact_submissions().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn subscribe_refuses_duplicates() {
        let store = Store::new();
        let sub = store.subscribe("a@example.com").await.unwrap();
        assert_eq!(sub.map(|s| s.id), Some(1));

        assert!(store.subscribe("a@example.com").await.unwrap().is_none());
        assert_eq!(store.subscribers().await.unwrap().len(), 1);

        let other = store.subscribe("b@example.com").await.unwrap().unwrap();
        assert_eq!(other.id, 2);
    }

    #[tokio::test]
    async fn clones_share_the_same_tables() {
        let store = Store::new();
        let clone = store.clone();
        clone.subscribe("a@example.com").await.unwrap();
        assert_eq!(store.subscribers().await.unwrap()[0].email, "a@example.com");
    }

    fn night(day: u32) -> NewSleepEntry {
        NewSleepEntry {
            date: chrono::NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            bed_time: chrono::NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            wake_time: chrono::NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            duration: 8.0,
            quality: 8,
            notes: String::new(),
            sleep_score: 75,
        }
    }

    #[tokio::test]
    async fn sleep_logs_are_kept_per_owner() {
        let store = Store::new();
        let first = store.add_sleep_entry("a", night(1)).await.unwrap();
        let second = store.add_sleep_entry("b", night(2)).await.unwrap();
        let third = store.add_sleep_entry("a", night(3)).await.unwrap();
        assert_eq!((first.id, second.id, third.id), (1, 2, 3));

        assert_eq!(store.sleep_entries("a").await.unwrap(), vec![first, third]);
        assert_eq!(store.sleep_entries("b").await.unwrap(), vec![second]);
        assert!(store.sleep_entries("nobody").await.unwrap().is_empty());
    }
}
