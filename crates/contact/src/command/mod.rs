use std::{sync::Arc, time::Duration};

use crate::{Delivery, LogDelivery};

mod submit_form;

pub use submit_form::ContactSubmission;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone)]
pub struct Command {
    delivery: Arc<dyn Delivery>,
    delay: Duration,
}

impl Command {
    pub fn new(delivery: Arc<dyn Delivery>, delay: Duration) -> Self {
        Self { delivery, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::new(Arc::new(LogDelivery), DEFAULT_DELAY)
    }
}
