// Company profile generation.
// All LLM calls go through llm_client::CompletionProvider; nothing here talks HTTP to the provider.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service_lines;
