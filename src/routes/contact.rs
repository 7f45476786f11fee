use axum::{
    extract::{Form, State, rejection::FormRejection},
    http::StatusCode,
    response::IntoResponse,
};
use showcase_contact::{ContactForm, Enquiry};
use showcase_shared::Error;
use strum::VariantArray;

use crate::{
    routes::AppState,
    template::{SERVER_ERROR_MESSAGE, Template, filters},
};

pub const DELIVERY_FAILED_MESSAGE: &str =
    "We could not send your message right now, please retry later";

pub const INVALID_SUBMISSION_MESSAGE: &str =
    "Your submission could not be read, please check the form and retry";

pub enum FormStatus {
    Idle,
    Sent,
    Invalid,
    Failed(&'static str),
}

impl FormStatus {
    pub fn is_sent(&self) -> bool {
        matches!(self, FormStatus::Sent)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FormStatus::Invalid)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FormStatus::Failed(_))
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            FormStatus::Failed(message) => *message,
            _ => "",
        }
    }
}

pub struct EnquiryOption {
    pub value: String,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: ContactForm,
    pub status: FormStatus,
    pub errors: Vec<String>,
    pub enquiries: Vec<EnquiryOption>,
}

impl ContactTemplate {
    pub fn new(form: ContactForm, status: FormStatus, errors: Vec<String>) -> Self {
        let enquiries = Enquiry::VARIANTS
            .iter()
            .map(|enquiry| {
                let value = enquiry.to_string();
                let selected = value == form.nature_of_enquiry;

                EnquiryOption { value, selected }
            })
            .collect();

        Self {
            form,
            status,
            errors,
            enquiries,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate::new(
        ContactForm::default(),
        FormStatus::Idle,
        vec![],
    ))
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> impl IntoResponse {
    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::warn!(%rejection, "Contact form body rejected");

            tokio::time::sleep(app_state.contact_command.delay()).await;

            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                template.render(ContactTemplate::new(
                    ContactForm::default(),
                    FormStatus::Failed(INVALID_SUBMISSION_MESSAGE),
                    vec![],
                )),
            )
                .into_response();
        }
    };

    let result = app_state
        .contact_command
        .submit_form(input.clone().into())
        .await;

    match result {
        Ok(()) => template
            .render(ContactTemplate::new(
                ContactForm::default(),
                FormStatus::Sent,
                vec![],
            ))
            .into_response(),
        Err(err @ Error::Validate(_)) => {
            let errors = err
                .field_messages()
                .into_iter()
                .map(|(_, message)| message)
                .collect();

            (
                StatusCode::UNPROCESSABLE_ENTITY,
                template.render(ContactTemplate::new(input, FormStatus::Invalid, errors)),
            )
                .into_response()
        }
        Err(Error::Delivery(reason)) => {
            tracing::error!(%reason, "Contact form delivery failed");

            (
                StatusCode::BAD_GATEWAY,
                template.render(ContactTemplate::new(
                    input,
                    FormStatus::Failed(DELIVERY_FAILED_MESSAGE),
                    vec![],
                )),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("{err}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                template.render(ContactTemplate::new(
                    input,
                    FormStatus::Failed(SERVER_ERROR_MESSAGE),
                    vec![],
                )),
            )
                .into_response()
        }
    }
}
