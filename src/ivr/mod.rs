use crate::CONFIG;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::path::Path;

mod level1;
mod level2;
pub mod menu;

pub fn router() -> Router {
    Router::new()
        .route(
            "/level1",
            get(level1::prompt_handler).post(level1::prompt_handler),
        )
        .route(
            "/level1-action",
            get(level1::action_handler).post(level1::action_handler),
        )
        .route(
            "/level2",
            get(level2::prompt_handler).post(level2::prompt_handler),
        )
        .route(
            "/level2-action",
            get(level2::action_handler).post(level2::action_handler),
        )
}

fn xml_dir() -> &'static Path {
    Path::new(CONFIG.settings.xml_dir)
}

/// Query parameters the provider appends when it calls back. Plivo sends
/// them on both GET and POST callbacks, so the handlers accept either verb.
#[derive(Debug, Default, Deserialize)]
pub struct MenuParams {
    #[serde(rename = "Digits", default)]
    pub digits: String,
    #[serde(default)]
    pub lang: Option<String>,
}

/// A call-control document, served with the XML content type Plivo expects.
pub struct Xml(pub String);

impl IntoResponse for Xml {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "text/xml")], self.0).into_response()
    }
}
