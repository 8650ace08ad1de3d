use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::FailureBody;
use crate::modules::validation::{null_as_default, validate_mood};

#[derive(Debug, Deserialize, Validate)]
pub struct MoodReflectionRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "validate_mood"))]
    pub mood: String,
}

#[derive(Debug, Serialize)]
pub struct MoodReflectionResponse {
    pub reflection: String,
}

#[derive(Debug, Serialize)]
pub struct MoodReflectionErrorResponse {
    pub error: String,
    pub reflection: String,
}

impl FailureBody for MoodReflectionErrorResponse {
    fn from_message(message: String) -> Self {
        Self {
            error: message,
            reflection: String::new(),
        }
    }
}
