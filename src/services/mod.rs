pub mod gemini;
pub mod mock;
