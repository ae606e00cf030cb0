/// System prompt for company-profile generation. The schema below is the canonical
/// flat wire schema that `CompanyProfile::from_value` reads.
pub const PROFILE_SYSTEM: &str = r#"You are a helpful assistant that analyzes company websites and creates structured profiles. Respond with JSON, following the structure below:
{
  "company_name": "",
  "service_line": ["service 1", "service 2"],
  "company_description": "",
  "tier1_keywords": ["keyword 1", "keyword 2"],
  "tier2_keywords": ["keyword 1", "keyword 2"],
  "emails": [],
  "poc": []
}"#;

pub const PROFILE_PROMPT_TEMPLATE: &str = "Generate a company profile in JSON format for the website: {url}. \
Include company name, service lines, description, tier 1 keywords (that the company would use to search for government opportunities), \
tier 2 keywords (that they might use), and leave emails and points of contact empty for user input. \
Make sure to follow the JSON structure provided and only include the fields specified. \
Do not add any additional information or context. The response should be a valid JSON object.";

/// Renders the user prompt for one company URL.
pub fn profile_prompt(url: &str) -> String {
    PROFILE_PROMPT_TEMPLATE.replace("{url}", url)
}
