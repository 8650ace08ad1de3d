use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::FailureBody;
use crate::modules::validation::{null_as_default, validate_mood};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MoodArtRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "validate_mood"))]
    pub mood: String,
    #[serde(default)]
    pub additional_details: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodArtResponse {
    pub art_description: String,
    /// First provider candidate, passed through as-is.
    pub generated_content: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodArtErrorResponse {
    pub art_description: String,
    pub error: String,
}

impl FailureBody for MoodArtErrorResponse {
    fn from_message(message: String) -> Self {
        Self {
            art_description: String::new(),
            error: message,
        }
    }
}
