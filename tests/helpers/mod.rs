#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use showcase::{
    AppState,
    config::{Config, SiteConfig},
};
use showcase_contact::{Command, ContactSubmission, Delivery};
use tower::ServiceExt;

pub const DELAY: Duration = Duration::from_millis(10);

#[derive(Default, Clone)]
pub struct RecordingDelivery(Arc<Mutex<Vec<ContactSubmission>>>);

impl RecordingDelivery {
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
        anyhow::bail!("connection refused")
    }
}

pub fn test_config() -> Config {
    Config {
        site: SiteConfig {
            name: "Test Studio".to_owned(),
            contact_email: "studio@example.com".to_owned(),
        },
        ..Default::default()
    }
}

pub fn create_test_app_with(delivery: Arc<dyn Delivery>) -> Router {
    showcase::create_app(AppState {
        config: test_config(),
        contact_command: Command::new(delivery, DELAY),
    })
}

pub fn create_test_app() -> (Router, RecordingDelivery) {
    let delivery = RecordingDelivery::default();
    let router = create_test_app_with(Arc::new(delivery.clone()));

    (router, delivery)
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(router: &Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();

    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(body.to_vec()).unwrap()
}

pub fn ada() -> Vec<(&'static str, &'static str)> {
    vec![
        ("firstName", "Ada"),
        ("lastName", "Lovelace"),
        ("email", "ada@example.com"),
        ("telephone", ""),
        ("natureOfEnquiry", "General"),
        ("message", "Hello"),
        ("joinCommunity", "on"),
        ("consent", "on"),
    ]
}

pub fn without(fields: &[(&'static str, &'static str)], name: &str) -> Vec<(&'static str, &'static str)> {
    fields
        .iter()
        .filter(|(key, _)| *key != name)
        .copied()
        .collect()
}
