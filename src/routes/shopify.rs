use axum::response::IntoResponse;

use crate::template::{Template, filters};

pub struct Panel {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

const PANELS: &[Panel] = &[
    Panel {
        id: "storefront",
        title: "Storefront",
        body: "A headless storefront rendered at the edge, tuned for first paint.",
    },
    Panel {
        id: "catalogue",
        title: "Catalogue",
        body: "Product imagery that cross-fades as you scroll through each collection.",
    },
    Panel {
        id: "checkout",
        title: "Checkout",
        body: "A checkout flow stripped back to the fields that matter.",
    },
];

#[derive(askama::Template)]
#[template(path = "shopify.html")]
pub struct ShopifyTemplate {
    pub panels: &'static [Panel],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ShopifyTemplate { panels: PANELS })
}
