pub mod cors;
pub mod health;
pub mod mood_art;
pub mod mood_reflection;
pub mod validation;
