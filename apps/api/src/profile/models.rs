use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// The structured record describing a company.
///
/// Every field is always present. Records built from provider output go through
/// [`CompanyProfile::from_value`], which substitutes `""` or `[]` per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: String,
    pub service_line: Vec<String>,
    pub company_description: String,
    pub tier1_keywords: Vec<String>,
    pub tier2_keywords: Vec<String>,
    pub emails: Vec<String>,
    pub poc: Vec<String>,
}

/// Free-text scalar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    CompanyName,
    CompanyDescription,
}

/// Sequence fields, edited through the shared unique-item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListField {
    ServiceLine,
    Tier1Keywords,
    Tier2Keywords,
    Emails,
    Poc,
}

impl ListField {
    /// Canonical wire key.
    pub fn key(self) -> &'static str {
        match self {
            ListField::ServiceLine => "service_line",
            ListField::Tier1Keywords => "tier1_keywords",
            ListField::Tier2Keywords => "tier2_keywords",
            ListField::Emails => "emails",
            ListField::Poc => "poc",
        }
    }

    /// Key path used by older response schemas, consulted only when the canonical key is absent.
    fn legacy_path(self) -> &'static [&'static str] {
        match self {
            ListField::ServiceLine => &["service_lines"],
            ListField::Tier1Keywords => &["tier_1_keywords"],
            ListField::Tier2Keywords => &["tier_2_keywords"],
            ListField::Emails => &["contacts", "emails"],
            ListField::Poc => &["contacts", "poc"],
        }
    }
}

impl CompanyProfile {
    /// Coerces an arbitrary parsed JSON value into a fully-populated profile.
    ///
    /// Strings that are not strings become `""`, sequences that are not arrays become `[]`,
    /// and non-string array elements are dropped. String elements are kept verbatim,
    /// including duplicates. A non-object value yields an empty profile.
    pub fn from_value(value: &Value) -> Self {
        Self {
            company_name: coerce_string(value.get("company_name")),
            service_line: coerce_list(value, ListField::ServiceLine),
            company_description: coerce_string(value.get("company_description")),
            tier1_keywords: coerce_list(value, ListField::Tier1Keywords),
            tier2_keywords: coerce_list(value, ListField::Tier2Keywords),
            emails: coerce_list(value, ListField::Emails),
            poc: coerce_list(value, ListField::Poc),
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::CompanyName => &self.company_name,
            TextField::CompanyDescription => &self.company_description,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::CompanyName => &mut self.company_name,
            TextField::CompanyDescription => &mut self.company_description,
        }
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::ServiceLine => &self.service_line,
            ListField::Tier1Keywords => &self.tier1_keywords,
            ListField::Tier2Keywords => &self.tier2_keywords,
            ListField::Emails => &self.emails,
            ListField::Poc => &self.poc,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::ServiceLine => &mut self.service_line,
            ListField::Tier1Keywords => &mut self.tier1_keywords,
            ListField::Tier2Keywords => &mut self.tier2_keywords,
            ListField::Emails => &mut self.emails,
            ListField::Poc => &mut self.poc,
        }
    }
}

fn coerce_string(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

fn coerce_list(root: &Value, field: ListField) -> Vec<String> {
    let value = match root.get(field.key()) {
        Some(v) => Some(v),
        None => {
            let legacy = field
                .legacy_path()
                .iter()
                .try_fold(root, |node, key| node.get(*key));
            if legacy.is_some() {
                debug!("Reading '{}' from legacy key path", field.key());
            }
            legacy
        }
    };

    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
