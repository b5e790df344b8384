use color_eyre::Result;
use validator::Validate;

use crate::store::{Store, Subscriber};

// ---------------------------------------------------------------------------
// NewsletterRepository trait
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait NewsletterRepository: Send + Sync {
    /// Returns `None` when the address is already on the list.
    fn subscribe(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<Subscriber>>> + Send;

    fn subscribers(&self) -> impl std::future::Future<Output = Result<Vec<Subscriber>>> + Send;
}

impl NewsletterRepository for Store {
    async fn subscribe(&self, email: &str) -> Result<Option<Subscriber>> {
        Store::subscribe(self, email).await
    }

    async fn subscribers(&self) -> Result<Vec<Subscriber>> {
        Store::subscribers(self).await
    }
}

#[derive(Clone, Debug, Default, serde::Deserialize, Validate)]
pub struct NewsletterSignup {
    #[serde(default)]
    #[validate(email)]
    pub email: String,
}

impl NewsletterSignup {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

pub enum SubscribeOutcome {
    Subscribed(Subscriber),
    AlreadySubscribed,
    InvalidEmail,
}

#[derive(Clone)]
pub struct NewsletterService<R: NewsletterRepository = Store> {
    repo: R,
}

impl<R: NewsletterRepository> NewsletterService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn subscribe(&self, signup: NewsletterSignup) -> Result<SubscribeOutcome> {
        let signup = NewsletterSignup::new(signup.email.trim());
        if signup.validate().is_err() {
            return Ok(SubscribeOutcome::InvalidEmail);
        }

        match self.repo.subscribe(&signup.email).await? {
            Some(subscriber) => Ok(SubscribeOutcome::Subscribed(subscriber)),
            None => {
                tracing::debug!("duplicate newsletter signup ignored");
                Ok(SubscribeOutcome::AlreadySubscribed)
            }
        }
    }

    pub async fn subscribers(&self) -> Result<Vec<Subscriber>> {
        self.repo.subscribers().await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn subscriber(email: &str) -> Subscriber {
        Subscriber {
            id: 7,
            email: email.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn subscribes_trimmed_address() {
        let mut mock = MockNewsletterRepository::new();
        mock.expect_subscribe()
            .withf(|email| email == "jane@example.com")
            .times(1)
            .returning(|email| {
                let sub = subscriber(email);
                Box::pin(async move { Ok(Some(sub)) })
            });

        let outcome = NewsletterService::new(mock)
            .subscribe(NewsletterSignup::new("  jane@example.com "))
            .await
            .unwrap();
        assert!(matches!(outcome, SubscribeOutcome::Subscribed(ref s) if s.id == 7));
    }

    #[tokio::test]
    async fn duplicate_is_reported() {
        let mut mock = MockNewsletterRepository::new();
        mock.expect_subscribe()
            .returning(|_| Box::pin(async { Ok(None) }));

        let outcome = NewsletterService::new(mock)
            .subscribe(NewsletterSignup::new("jane@example.com"))
            .await
            .unwrap();
        assert!(matches!(outcome, SubscribeOutcome::AlreadySubscribed));
    }

    #[tokio::test]
    async fn invalid_email_skips_repository() {
        let mut mock = MockNewsletterRepository::new();
        mock.expect_subscribe().never();

        let service = NewsletterService::new(mock);
        for email in ["nope", "", "a@b..c", "jane@", "ja ne@example.com"] {
            let outcome = service.subscribe(NewsletterSignup::new(email)).await.unwrap();
            assert!(matches!(outcome, SubscribeOutcome::InvalidEmail), "{email}");
        }
    }
}
