use std::env::var;

const DEFAULT_FORWARD_TO_NUMBER: &str = "+1234567890";
const DEFAULT_AUDIO_URL: &str = "https://www2.cs.uic.edu/~i101/SoundFiles/BabyElephantWalk60.wav";
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct Secrets {
    pub plivo_auth_id: String,
    pub plivo_auth_token: String,
    pub plivo_phone_number: String,
    pub forward_to_number: String,
    pub audio_url: String,
    pub base_url: String,
}

impl Secrets {
    /// Credentials and the account phone number may be absent in development.
    /// The call-trigger route reports a configuration error per request
    /// instead of refusing to boot.
    pub fn from_env() -> Self {
        Self {
            plivo_auth_id: var("PLIVO_AUTH_ID").unwrap_or_default(),
            plivo_auth_token: var("PLIVO_AUTH_TOKEN").unwrap_or_default(),
            plivo_phone_number: var("PLIVO_PHONE_NUMBER").unwrap_or_default(),
            forward_to_number: var("FORWARD_TO_NUMBER")
                .unwrap_or_else(|_| DEFAULT_FORWARD_TO_NUMBER.to_string()),
            audio_url: var("AUDIO_URL").unwrap_or_else(|_| DEFAULT_AUDIO_URL.to_string()),
            base_url: var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            plivo_auth_id: "MA123".to_string(),
            plivo_auth_token: "secret".to_string(),
            plivo_phone_number: "+15550100".to_string(),
            forward_to_number: "+15550123".to_string(),
            audio_url: "https://example.com/hold.mp3".to_string(),
            base_url: "http://localhost:5000".to_string(),
        }
    }
}
