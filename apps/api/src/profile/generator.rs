//! Profile Fetcher — validates a company URL, asks the completion provider for a
//! profile and coerces the answer into a `CompanyProfile`.
//!
//! Flow: validate_company_url → provider.complete_json → serde_json parse →
//!       CompanyProfile::from_value.
//!
//! One attempt per call. There is no partial success: either a fully-defaulted
//! record comes back or a `ProfileError` does.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};
use url::Url;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::CompletionProvider;
use crate::profile::models::CompanyProfile;
use crate::profile::prompts::{profile_prompt, PROFILE_SYSTEM};

pub const EMPTY_URL_MESSAGE: &str = "Enter a company website URL";
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://example.com)";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate profile. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Empty or unparseable URL. Raised before any network call.
    #[error("{0}")]
    Validation(String),

    /// Network, empty-content or parse failure. The cause is logged, never shown.
    #[error("{}", GENERATION_FAILED_MESSAGE)]
    Generation,
}

/// Checks that `input` is a non-empty, absolute URL and returns the trimmed form.
pub fn validate_company_url(input: &str) -> Result<&str, ProfileError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::Validation(EMPTY_URL_MESSAGE.to_string()));
    }
    Url::parse(trimmed).map_err(|e| {
        info!("Rejected company URL '{}': {}", trimmed, e);
        ProfileError::Validation(INVALID_URL_MESSAGE.to_string())
    })?;
    Ok(trimmed)
}

/// Generates company profiles through an injected completion provider.
#[derive(Clone)]
pub struct ProfileGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl ProfileGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn generate(&self, url: &str) -> Result<CompanyProfile, ProfileError> {
        let url = validate_company_url(url)?;

        let system = format!("{PROFILE_SYSTEM}\n\n{JSON_ONLY_SYSTEM}");
        let content = self
            .provider
            .complete_json(&system, &profile_prompt(url))
            .await
            .map_err(|e| {
                error!("Error generating company profile for {}: {}", url, e);
                ProfileError::Generation
            })?;

        if content.trim().is_empty() {
            error!("Error generating company profile for {}: no content in response", url);
            return Err(ProfileError::Generation);
        }

        let parsed: Value = serde_json::from_str(content.trim()).map_err(|e| {
            error!("Error parsing AI response for {}: {}", url, e);
            ProfileError::Generation
        })?;

        let profile = CompanyProfile::from_value(&parsed);
        info!(
            "Generated profile for {}: {} service lines, {} tier-1 keywords",
            url,
            profile.service_line.len(),
            profile.tier1_keywords.len()
        );
        Ok(profile)
    }
}
