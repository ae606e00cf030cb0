use crate::profile::generator::ProfileGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-user data: profiles and edit sessions live with the client.
#[derive(Clone)]
pub struct AppState {
    pub generator: ProfileGenerator,
}
