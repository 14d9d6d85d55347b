//! Pulling structured JSON out of free-form LLM answers

mod json;

pub use json::extract_json;
