use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use validator::ValidationError;

pub fn validate_mood(mood: &str) -> Result<(), ValidationError> {
    if mood.trim().is_empty() {
        return Err(ValidationError::new("mood_required").with_message(Cow::Borrowed("Mood is required")));
    }
    Ok(())
}

/// Reads an explicit `null` the same as a missing field, so `"mood": null`
/// hits the same "Mood is required" check as an empty string.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
