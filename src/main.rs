use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use plivo::Client as PlivoClient;
use secrets::Secrets;
use static_toml::static_toml;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;

static_toml! { static CONFIG = include_toml!("Config.toml"); }

mod api;
mod error;
mod ivr;
mod secrets;
mod templates;

#[tokio::main]
async fn main() {
    // Intitialize environment and logger
    dotenv::dotenv().ok();
    env_logger::init();

    // Load the secrets
    let secrets = Secrets::from_env();
    log::info!("Auth ID: {}", secrets.plivo_auth_id);
    log::info!("Base URL: {}", secrets.base_url);

    // Initialize the Plivo client
    log::info!("Initializing the Plivo client");
    let plivo = PlivoClient::new(&secrets.plivo_auth_id, &secrets.plivo_auth_token);

    // Initialize the TCP listener
    log::info!("Binding the server at {}", CONFIG.settings.local_address);
    let tcp = TcpListener::bind(CONFIG.settings.local_address)
        .await
        .expect("Failed to bind the server address");

    // Start the webserver
    log::info!("Starting the webserver");
    axum::serve(tcp, app(secrets, plivo).into_make_service())
        .await
        .expect("Failed to start the server");
}

fn app(secrets: Secrets, plivo: PlivoClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin("*".parse::<HeaderValue>().unwrap())
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false);

    Router::new()
        .route("/health", get(health_check))
        .route("/make-call", post(api::make_call::make_call_handler))
        .nest("/ivr", ivr::router())
        .route_service("/", ServeFile::new("static/index.html"))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(Extension(secrets))
        .layer(Extension(plivo))
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": CONFIG.settings.service_name,
    }))
}

async fn not_found_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_is_ok_regardless_of_configuration() {
        // Empty credentials must not affect the health check
        let router = app(
            Secrets {
                plivo_phone_number: String::new(),
                plivo_auth_id: String::new(),
                plivo_auth_token: String::new(),
                ..Secrets::for_tests()
            },
            PlivoClient::new("", ""),
        );

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], CONFIG.settings.service_name);
    }

    #[tokio::test]
    async fn unknown_route_returns_json_not_found() {
        let router = app(Secrets::for_tests(), PlivoClient::new("", ""));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/no-such-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
