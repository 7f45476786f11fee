use async_trait::async_trait;

use crate::ContactSubmission;

/// Where an accepted submission ends up.
#[async_trait]
pub trait Delivery: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> anyhow::Result<()>;
}

/// Emits the submission as a single structured log record.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDelivery;

#[async_trait]
impl Delivery for LogDelivery {
    async fn deliver(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        tracing::info!(
            first_name = %submission.first_name,
            last_name = %submission.last_name,
            email = %submission.email,
            telephone = %submission.telephone,
            nature_of_enquiry = %submission.nature_of_enquiry,
            message_body = %submission.message,
            join_community = submission.join_community,
            consent = submission.consent,
            "Contact form submitted"
        );

        Ok(())
    }
}
