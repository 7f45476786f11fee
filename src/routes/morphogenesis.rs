use axum::response::IntoResponse;

use crate::template::{Template, filters};

/// Full-bleed canvas driven by `static/js/morphogenesis.js`.
#[derive(askama::Template)]
#[template(path = "morphogenesis.html")]
pub struct MorphogenesisTemplate;

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(MorphogenesisTemplate)
}
