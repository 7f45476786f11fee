use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use showcase_contact::{Command, ContactForm, ContactSubmission, Delivery};

#[derive(Default, Clone)]
pub struct RecordingDelivery(Arc<Mutex<Vec<ContactSubmission>>>);

impl RecordingDelivery {
    #[allow(dead_code)]
    pub fn delivered(&self) -> Vec<ContactSubmission> {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delivery for RecordingDelivery {
    async fn deliver(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        self.0.lock().unwrap().push(submission.clone());

        Ok(())
    }
}

pub struct FailingDelivery;

#[async_trait]
impl Delivery for FailingDelivery {
    async fn deliver(&self, _submission: &ContactSubmission) -> anyhow::Result<()> {
        anyhow::bail!("mail server unreachable")
    }
}

#[allow(dead_code)]
pub fn setup_command(delay: Duration) -> (Command, RecordingDelivery) {
    let delivery = RecordingDelivery::default();
    let command = Command::new(Arc::new(delivery.clone()), delay);

    (command, delivery)
}

#[allow(dead_code)]
pub fn ada() -> ContactForm {
    ContactForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        telephone: "".to_owned(),
        nature_of_enquiry: "General".to_owned(),
        message: "Hello".to_owned(),
        join_community: Some("on".to_owned()),
        consent: Some("on".to_owned()),
    }
}
