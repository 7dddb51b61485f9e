// API data models

pub mod gemini;
pub mod relay;
