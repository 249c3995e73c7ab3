mod call;

pub use call::{CallCreated, OutboundCall};
use reqwest::{Client as ReqwestClient, StatusCode};
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

const API_BASE_URL: &str = "https://api.plivo.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Minimal client for the Plivo REST API. Covers the call-creation
/// endpoint; call-control answers go through webhooks, not this client.
#[derive(Clone)]
pub struct Client {
    auth_id: String,
    auth_token: String,
    api_url: String,
    client: ReqwestClient,
}

#[derive(Debug)]
pub enum PlivoError {
    ReqwestError(reqwest::Error),
    HttpError(StatusCode, String),
    ParsingError,
}

impl Display for PlivoError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            PlivoError::ReqwestError(ref e) => e.fmt(f),
            PlivoError::HttpError(_, ref message) => write!(f, "Plivo API error: {}", message),
            PlivoError::ParsingError => f.write_str("Failed to parse the Plivo response"),
        }
    }
}

impl Error for PlivoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            PlivoError::ReqwestError(ref e) => Some(e),
            _ => None,
        }
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

impl Client {
    pub fn new(auth_id: &str, auth_token: &str) -> Client {
        Client {
            auth_id: auth_id.to_string(),
            auth_token: auth_token.to_string(),
            api_url: API_BASE_URL.to_string(),
            client: ReqwestClient::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build the http client"),
        }
    }

    /// Point the client at a different API origin, for tests against a
    /// local mock server.
    pub fn with_api_url(mut self, api_url: &str) -> Client {
        self.api_url = api_url.to_string();
        self
    }

    async fn send_request<B, T>(&self, endpoint: &str, body: &B) -> Result<T, PlivoError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/Account/{}/{}/", self.api_url, self.auth_id, endpoint);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.auth_id, Some(&self.auth_token))
            .json(body)
            .send()
            .await
            .map_err(PlivoError::ReqwestError)?;

        match response.status() {
            StatusCode::CREATED | StatusCode::OK => {}
            other => {
                let content = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ErrorBody>(&content)
                    .map(|body| body.error)
                    .unwrap_or(content);

                return Err(PlivoError::HttpError(other, message));
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|_| PlivoError::ParsingError)
    }
}
