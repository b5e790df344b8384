use color_eyre::Result;
use validator::Validate;

use crate::store::{ContactSubmission, NewContact, Store};

// ---------------------------------------------------------------------------
// ContactRepository trait
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait ContactRepository: Send + Sync {
    fn create_contact_submission(
        &self,
        new: NewContact,
    ) -> impl std::future::Future<Output = Result<ContactSubmission>> + Send;

    fn contact_submissions(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ContactSubmission>>> + Send;
}

impl ContactRepository for Store {
    async fn create_contact_submission(&self, new: NewContact) -> Result<ContactSubmission> {
        Store::create_contact_submission(self, new).await
    }

    async fn contact_submissions(&self) -> Result<Vec<ContactSubmission>> {
        Store::contact_submissions(self).await
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

pub enum ContactOutcome {
    Received(ContactSubmission),
    /// The form was rejected. Carries a message for the visitor.
    Invalid(String),
}

/// Form input. Fields are trimmed before the rules are checked.
#[derive(Clone, Debug, Default, serde::Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please select a subject."))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(min = 10, message = "Message must be at least 10 characters."))]
    pub message: String,
}

impl ContactForm {
    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// ContactService
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct ContactService<R: ContactRepository = Store> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn submit(&self, form: ContactForm) -> Result<ContactOutcome> {
        let form = form.trimmed();
        if let Err(errors) = form.validate() {
            let message =
                super::validation_message(&errors, &["name", "email", "subject", "message"]);
            tracing::debug!("contact form rejected: {message}");
            return Ok(ContactOutcome::Invalid(message));
        }

        let new = NewContact {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
        };
        let submission = self.repo.create_contact_submission(new).await?;
        Ok(ContactOutcome::Received(submission))
    }

    pub async fn submissions(&self) -> Result<Vec<ContactSubmission>> {
        self.repo.contact_submissions().await
    }
}
