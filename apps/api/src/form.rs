//! Per-instance form controller: URL input, loading flag, error string and the
//! edit state of the profile it produced.
//!
//! Errors never escape: each action turns its failure into `error` (or the session's
//! field error) and leaves the committed profile as it was.

use tracing::warn;

use crate::edit::service_lines::ServiceLineManager;
use crate::edit::session::EditSession;
use crate::profile::generator::{validate_company_url, ProfileError, ProfileGenerator};
use crate::profile::models::CompanyProfile;
use crate::profile::service_lines::suggest_service_lines;

#[derive(Debug, Default)]
pub struct ProfileForm {
    url: String,
    loading: bool,
    error: Option<String>,
    session: EditSession,
    service_lines: ServiceLineManager,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    pub fn service_lines(&self) -> &ServiceLineManager {
        &self.service_lines
    }

    pub fn service_lines_mut(&mut self) -> &mut ServiceLineManager {
        &mut self.service_lines
    }

    /// Starts a generation: returns the URL to fetch, or `None` if a fetch is already
    /// in flight or the URL was rejected (in which case `error` is set).
    pub fn begin_generate(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        match validate_company_url(&self.url) {
            Ok(url) => {
                let url = url.to_string();
                self.loading = true;
                self.error = None;
                Some(url)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn finish_generate(&mut self, result: Result<CompanyProfile, ProfileError>) {
        self.loading = false;
        match result {
            Ok(profile) => {
                self.service_lines = ServiceLineManager::new(suggest_service_lines(&profile));
                self.session.load_generated(profile);
                self.error = None;
            }
            Err(e) => {
                warn!("Profile generation failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Runs a full generation round trip against `generator`.
    pub async fn submit(&mut self, generator: &ProfileGenerator) {
        if let Some(url) = self.begin_generate() {
            let result = generator.generate(&url).await;
            self.finish_generate(result);
        }
    }
}
