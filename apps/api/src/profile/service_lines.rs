use crate::profile::models::CompanyProfile;

/// Tier-1 keywords must be longer than this to be promoted to a service line.
const MIN_KEYWORD_LEN: usize = 5;
const MAX_SUGGESTIONS: usize = 2;

/// Service lines offered after generation: the profile's own list followed by
/// up to two title-cased tier-1 keywords not already present.
pub fn suggest_service_lines(profile: &CompanyProfile) -> Vec<String> {
    let mut lines = profile.service_line.clone();
    let promoted = profile
        .tier1_keywords
        .iter()
        .filter(|k| k.chars().count() > MIN_KEYWORD_LEN)
        .take(MAX_SUGGESTIONS)
        .map(|k| title_case(k));

    for line in promoted {
        if !lines.contains(&line) {
            lines.push(line);
        }
    }
    lines
}

/// Upper-cases the first character of each space-separated word; the rest is untouched.
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
