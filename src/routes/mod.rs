use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use showcase_contact::{Command, Delivery, LogDelivery};
use showcase_notification::EmailDelivery;

use crate::{
    config::{Config, DeliveryKind},
    template::{NotFoundTemplate, Template},
};

mod contact;
mod health;
mod index;
mod morphogenesis;
mod shopify;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub contact_command: Command,
}

impl AppState {
    /// Builds the state with the delivery selected by `contact.delivery`.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let delivery: Arc<dyn Delivery> = match config.contact.delivery {
            DeliveryKind::Log => Arc::new(LogDelivery),
            DeliveryKind::Email => Arc::new(EmailDelivery::new(&config.email)?),
        };

        tracing::info!(
            delivery = ?config.contact.delivery,
            delay_ms = config.contact.delay_ms,
            "Contact form handler configured"
        );

        let contact_command = Command::new(delivery, config.contact.delay());

        Ok(Self {
            config,
            contact_command,
        })
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/morphogenesis", get(morphogenesis::page))
        .route("/shopify", get(shopify::page))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
