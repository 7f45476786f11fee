use serde::Deserialize;

use crate::ContactSubmission;

/// Value a browser posts for a checked checkbox that has no explicit `value`.
pub const CHECKBOX_CHECKED: &str = "on";

pub fn checkbox(value: Option<&str>) -> bool {
    value == Some(CHECKBOX_CHECKED)
}

/// Raw contact form payload as posted by the contact page.
///
/// Every text field defaults to the empty string so a missing field is
/// reported by validation instead of rejecting the whole request.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    pub nature_of_enquiry: String,
    pub message: String,
    pub join_community: Option<String>,
    pub consent: Option<String>,
}

impl ContactForm {
    pub fn is_join_community_checked(&self) -> bool {
        checkbox(self.join_community.as_deref())
    }

    pub fn is_consent_checked(&self) -> bool {
        checkbox(self.consent.as_deref())
    }

    pub fn into_submission(self) -> ContactSubmission {
        let join_community = self.is_join_community_checked();
        let consent = self.is_consent_checked();

        ContactSubmission {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            telephone: self.telephone,
            nature_of_enquiry: self.nature_of_enquiry,
            message: self.message,
            join_community,
            consent,
        }
    }
}

impl From<ContactForm> for ContactSubmission {
    fn from(value: ContactForm) -> Self {
        value.into_submission()
    }
}
