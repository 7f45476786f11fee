use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

use crate::config::SiteConfig;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    /// Looks up a site-wide value (`site_name`, `contact_email`) passed to
    /// every render.
    #[askama::filter_fn]
    pub fn site(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let site_value = askama::get_value::<String>(values, value)?;

        Ok(site_value.to_owned())
    }
}

pub struct Template {
    site: SiteConfig,
}

impl Template {
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("site_name", Box::new(self.site.name.to_owned()));
        values.insert("contact_email", Box::new(self.site.contact_email.to_owned()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(state.config.site.clone()))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
