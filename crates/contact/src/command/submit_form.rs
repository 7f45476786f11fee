use showcase_shared::Error;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(max = 40, message = "Telephone number is too long"))]
    pub telephone: String,
    pub nature_of_enquiry: String,
    #[validate(length(max = 5000, message = "Message is too long"))]
    pub message: String,
    pub join_community: bool,
    pub consent: bool,
}

impl super::Command {
    /// Validates the submission, waits the configured delay, then hands it
    /// to the delivery. The delay is observed whether or not validation
    /// passes.
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn submit_form(&self, input: ContactSubmission) -> showcase_shared::Result<()> {
        let validated = input.validate();

        tokio::time::sleep(self.delay).await;

        validated?;

        self.delivery
            .deliver(&input)
            .await
            .map_err(|err| Error::Delivery(format!("{err:#}")))?;

        Ok(())
    }
}
