use std::env;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.picaos.com/v1/passthrough";
pub const DEFAULT_ACTION_ID: &str = "conn_mod_def::GCmd5BQE388::PISTzTbvRSqXx0N0rMa-Lw";
pub const DEFAULT_ART_MODEL: &str = "gemini-2.0-flash-exp-image-generation";
pub const DEFAULT_REFLECTION_MODEL: &str = "gemini-1.5-flash";

/// Credentials and endpoints for the Pica passthrough in front of Gemini.
///
/// Built once at startup and handed to the provider client. Missing keys are
/// kept as empty strings; the passthrough rejects them and the relay reports
/// that as an upstream error.
#[derive(Clone)]
pub struct ProviderConfig {
    pub secret_key: String,
    pub connection_key: String,
    pub action_id: String,
    pub base_url: String,
    pub art_model: String,
    pub reflection_model: String,
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("PICA_SECRET_KEY").unwrap_or_default(),
            connection_key: env::var("PICA_GEMINI_CONNECTION_KEY").unwrap_or_default(),
            action_id: env::var("PICA_ACTION_ID").unwrap_or_else(|_| DEFAULT_ACTION_ID.to_string()),
            base_url: env::var("PICA_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            art_model: env::var("MOOD_ART_MODEL").unwrap_or_else(|_| DEFAULT_ART_MODEL.to_string()),
            reflection_model: env::var("MOOD_REFLECTION_MODEL")
                .unwrap_or_else(|_| DEFAULT_REFLECTION_MODEL.to_string()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            connection_key: String::new(),
            action_id: DEFAULT_ACTION_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            art_model: DEFAULT_ART_MODEL.to_string(),
            reflection_model: DEFAULT_REFLECTION_MODEL.to_string(),
        }
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("secret_key", &redact(&self.secret_key))
            .field("connection_key", &redact(&self.connection_key))
            .field("action_id", &self.action_id)
            .field("base_url", &self.base_url)
            .field("art_model", &self.art_model)
            .field("reflection_model", &self.reflection_model)
            .finish()
    }
}
