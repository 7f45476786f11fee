use async_trait::async_trait;
use showcase_contact::{ContactSubmission, Delivery};

use crate::{EmailConfig, EmailService};

/// Forwards each submission as a plain text email to the site's contact
/// address.
#[derive(Clone)]
pub struct EmailDelivery {
    service: EmailService,
    to: String,
}

impl EmailDelivery {
    pub fn new(config: &EmailConfig) -> showcase_shared::Result<Self> {
        if config.contact_address.is_empty() {
            showcase_shared::bail!("email delivery needs a contact address");
        }

        Ok(Self {
            service: EmailService::new(config)?,
            to: config.contact_address.to_owned(),
        })
    }
}

pub fn format_submission(submission: &ContactSubmission) -> String {
    let yes_no = |value: bool| if value { "yes" } else { "no" };

    format!(
        r#"
First name: {}
Last name: {}
Email: {}
Telephone: {}
Nature of enquiry: {}
Join community: {}
Consent: {}
Message:
{}
"#,
        submission.first_name,
        submission.last_name,
        submission.email,
        submission.telephone,
        submission.nature_of_enquiry,
        yes_no(submission.join_community),
        yes_no(submission.consent),
        submission.message
    )
}

#[async_trait]
impl Delivery for EmailDelivery {
    async fn deliver(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        self.service
            .send_plain(
                &self.to,
                format!(
                    "New message from contact page: {} {}",
                    submission.first_name, submission.last_name
                ),
                format_submission(submission),
            )
            .await
    }
}
