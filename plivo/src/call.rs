use crate::{Client, PlivoError};
use serde::{Deserialize, Serialize};

/// Parameters for the call-creation endpoint. The answer URL is fetched
/// with `answer_method` once the callee picks up.
#[derive(Debug, Serialize)]
pub struct OutboundCall<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub answer_url: &'a str,
    pub answer_method: &'a str,
}

impl<'a> OutboundCall<'a> {
    pub fn new(from: &'a str, to: &'a str, answer_url: &'a str) -> OutboundCall<'a> {
        OutboundCall {
            from,
            to,
            answer_url,
            answer_method: "GET",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CallCreated {
    #[serde(default)]
    pub request_uuid: String,
    #[serde(default)]
    pub message: String,
}

impl Client {
    pub async fn make_call(&self, call: OutboundCall<'_>) -> Result<CallCreated, PlivoError> {
        self.send_request("Call", &call).await
    }
}
