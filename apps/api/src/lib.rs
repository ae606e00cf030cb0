pub mod config;
pub mod edit;
pub mod errors;
pub mod form;
pub mod llm_client;
pub mod profile;
pub mod routes;
pub mod state;
