use crate::error::AppError;
use crate::secrets::Secrets;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use plivo::{Client as PlivoClient, OutboundCall};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MakeCallArgs {
    #[serde(default)]
    pub to_number: Option<String>,
}

/// Initiates an outbound call that lands in the level 1 menu once answered.
pub async fn make_call_handler(
    plivo: Extension<PlivoClient>,
    secrets: Extension<Secrets>,
    Json(args): Json<MakeCallArgs>,
) -> Result<impl IntoResponse, AppError> {
    let to_number = args
        .to_number
        .filter(|number| !number.is_empty())
        .ok_or_else(|| AppError::Validation("Phone number is required".to_string()))?;

    if secrets.plivo_phone_number.is_empty() {
        return Err(AppError::Configuration(
            "PLIVO_PHONE_NUMBER not configured in .env file".to_string(),
        ));
    }

    // Entry point of the menu tree: the provider fetches the level 1
    // document from this URL once the call connects
    let answer_url = format!("{}/ivr/level1", secrets.base_url);

    log::debug!("Initiating a call to {} via {}", to_number, answer_url);

    let created = plivo
        .make_call(OutboundCall::new(
            &secrets.plivo_phone_number,
            &to_number,
            &answer_url,
        ))
        .await?;

    log::info!("Call {} initiated to {}", created.request_uuid, to_number);

    Ok(Json(serde_json::json!({
        "success": true,
        "call_uuid": created.request_uuid,
        "message": format!("Call initiated to {}", to_number),
    })))
}
