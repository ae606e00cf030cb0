//! Edit-State Manager — committed profile, draft copy and the per-field input buffers.
//!
//! Two states: View and Edit.
//! - View → Edit (`toggle_edit_mode`): draft = copy of committed (or empty), buffers cleared.
//! - Edit → View via save (`toggle_edit_mode`): pending buffers merged into the draft,
//!   then the draft replaces committed.
//! - Edit → View via cancel (`close_edit_mode`): draft reset to committed, nothing merged.
//!
//! Every edit action is a no-op in View mode. A refused action never touches committed.

use thiserror::Error;
use tracing::{debug, info};

use crate::edit::email::{is_valid_email, INVALID_EMAIL_MESSAGE};
use crate::edit::list::{parse_items, EditableList};
use crate::profile::models::{CompanyProfile, ListField, TextField};

/// List fields that have a pending text input merged on save.
pub const BUFFERED_FIELDS: [ListField; 4] = [
    ListField::Tier1Keywords,
    ListField::Tier2Keywords,
    ListField::Emails,
    ListField::Poc,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{message}")]
    EmailValidation { value: String, message: String },
}

#[derive(Debug, Clone, Default)]
struct PendingInputs {
    tier1: String,
    tier2: String,
    emails: String,
    poc: String,
}

impl PendingInputs {
    fn slot(&self, field: ListField) -> Option<&String> {
        match field {
            ListField::Tier1Keywords => Some(&self.tier1),
            ListField::Tier2Keywords => Some(&self.tier2),
            ListField::Emails => Some(&self.emails),
            ListField::Poc => Some(&self.poc),
            ListField::ServiceLine => None,
        }
    }

    fn slot_mut(&mut self, field: ListField) -> Option<&mut String> {
        match field {
            ListField::Tier1Keywords => Some(&mut self.tier1),
            ListField::Tier2Keywords => Some(&mut self.tier2),
            ListField::Emails => Some(&mut self.emails),
            ListField::Poc => Some(&mut self.poc),
            ListField::ServiceLine => None,
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditSession {
    committed: Option<CompanyProfile>,
    draft: CompanyProfile,
    inputs: PendingInputs,
    edit_mode: bool,
    email_error: Option<String>,
}

impl EditSession {
    pub fn new(committed: Option<CompanyProfile>) -> Self {
        let draft = committed.clone().unwrap_or_default();
        Self {
            committed,
            draft,
            ..Default::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit_mode
    }

    pub fn committed(&self) -> Option<&CompanyProfile> {
        self.committed.as_ref()
    }

    pub fn draft(&self) -> &CompanyProfile {
        &self.draft
    }

    /// What the UI shows: the draft while editing, the committed profile otherwise.
    pub fn current(&self) -> Option<&CompanyProfile> {
        if self.edit_mode {
            Some(&self.draft)
        } else {
            self.committed.as_ref()
        }
    }

    pub fn input(&self, field: ListField) -> &str {
        self.inputs.slot(field).map(String::as_str).unwrap_or_default()
    }

    pub fn set_input(&mut self, field: ListField, value: impl Into<String>) {
        if !self.edit_mode {
            return;
        }
        if let Some(slot) = self.inputs.slot_mut(field) {
            *slot = value.into();
        }
    }

    pub fn email_error(&self) -> Option<&str> {
        self.email_error.as_deref()
    }

    /// Makes a freshly generated profile the committed one and returns to View mode.
    pub fn load_generated(&mut self, profile: CompanyProfile) {
        self.draft = profile.clone();
        self.committed = Some(profile);
        self.inputs.clear();
        self.email_error = None;
        self.edit_mode = false;
    }

    /// Enters Edit mode, or saves and leaves it.
    pub fn toggle_edit_mode(&mut self) -> Result<(), EditError> {
        if self.edit_mode {
            self.save()
        } else {
            self.draft = self.committed.clone().unwrap_or_default();
            self.inputs.clear();
            self.email_error = None;
            self.edit_mode = true;
            Ok(())
        }
    }

    /// Discards the draft and returns to View mode.
    pub fn close_edit_mode(&mut self) {
        self.draft = self.committed.clone().unwrap_or_default();
        self.inputs.clear();
        self.email_error = None;
        self.edit_mode = false;
    }

    pub fn update_field(&mut self, field: TextField, value: impl Into<String>) {
        if !self.edit_mode {
            debug!("Ignoring update of {:?} outside edit mode", field);
            return;
        }
        *self.draft.text_mut(field) = value.into();
    }

    /// Adds the comma-separated items of `value` to the draft list for `field`.
    /// Email batches containing any invalid address are rejected whole.
    pub fn handle_array_field(&mut self, field: ListField, value: &str) -> Result<usize, EditError> {
        if !self.edit_mode {
            debug!("Ignoring add to {} outside edit mode", field.key());
            return Ok(0);
        }
        let items = parse_items(value);
        if items.is_empty() {
            return Ok(0);
        }
        if field == ListField::Emails {
            check_emails(&items)?;
        }
        Ok(EditableList::new(self.draft.list_mut(field)).add_items(items))
    }

    pub fn remove_array_field(&mut self, field: ListField, index: usize) -> Option<String> {
        if !self.edit_mode {
            return None;
        }
        EditableList::new(self.draft.list_mut(field)).remove(index)
    }

    /// Email buffer commit (comma key or blur). On rejection the buffer is kept and
    /// the field error is set; on success both are cleared.
    pub fn commit_email_input(&mut self) -> Result<usize, EditError> {
        if !self.edit_mode || self.inputs.emails.trim().is_empty() {
            return Ok(0);
        }
        let pending = self.inputs.emails.clone();
        match self.handle_array_field(ListField::Emails, &pending) {
            Ok(added) => {
                self.inputs.emails.clear();
                self.email_error = None;
                Ok(added)
            }
            Err(e) => {
                self.email_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Buffer commit for any buffered field. Non-email buffers are always cleared.
    pub fn commit_input(&mut self, field: ListField) -> Result<usize, EditError> {
        if field == ListField::Emails {
            return self.commit_email_input();
        }
        if !self.edit_mode {
            return Ok(0);
        }
        let pending = match self.inputs.slot_mut(field) {
            Some(slot) => std::mem::take(slot),
            None => return Ok(0),
        };
        self.handle_array_field(field, &pending)
    }

    fn save(&mut self) -> Result<(), EditError> {
        if let Err(e) = check_emails(&parse_items(&self.inputs.emails)) {
            self.email_error = Some(e.to_string());
            return Err(e);
        }

        for field in BUFFERED_FIELDS {
            let pending = self.input(field).to_string();
            if !pending.trim().is_empty() {
                self.handle_array_field(field, &pending)?;
            }
        }

        info!(
            "Committing edited profile '{}' ({} emails, {} contacts)",
            self.draft.company_name,
            self.draft.emails.len(),
            self.draft.poc.len()
        );
        self.committed = Some(self.draft.clone());
        self.inputs.clear();
        self.email_error = None;
        self.edit_mode = false;
        Ok(())
    }
}

fn check_emails(items: &[String]) -> Result<(), EditError> {
    match items.iter().find(|item| !is_valid_email(item)) {
        Some(bad) => Err(EditError::EmailValidation {
            value: bad.clone(),
            message: INVALID_EMAIL_MESSAGE.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_profile() -> CompanyProfile {
        CompanyProfile {
            company_name: "Acme".to_string(),
            service_line: strings(&["Consulting"]),
            company_description: "Original description".to_string(),
            tier1_keywords: strings(&["widgets"]),
            tier2_keywords: vec![],
            emails: vec![],
            poc: strings(&["A", "B", "C"]),
        }
    }

    fn editing() -> EditSession {
        let mut session = EditSession::new(Some(sample_profile()));
        session.toggle_edit_mode().unwrap();
        session
    }

    #[test]
    fn test_enter_edit_copies_committed() {
        let session = editing();
        assert!(session.is_editing());
        assert_eq!(session.draft(), &sample_profile());
        assert_eq!(session.current(), Some(&sample_profile()));
    }

    #[test]
    fn test_enter_edit_without_profile_uses_empty_draft() {
        let mut session = EditSession::default();
        session.toggle_edit_mode().unwrap();
        assert_eq!(session.draft(), &CompanyProfile::default());
        assert!(session.committed().is_none());
    }

    #[test]
    fn test_email_batch_is_deduplicated_in_order() {
        let mut session = editing();
        let added = session
            .handle_array_field(ListField::Emails, "a@b.com, a@b.com, c@d.com")
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(session.draft().emails, strings(&["a@b.com", "c@d.com"]));
    }

    #[test]
    fn test_invalid_email_commit_keeps_buffer_and_sets_error() {
        let mut session = editing();
        session.set_input(ListField::Emails, "not-an-email");

        let err = session.commit_email_input().unwrap_err();

        assert_eq!(err.to_string(), INVALID_EMAIL_MESSAGE);
        assert_eq!(session.email_error(), Some(INVALID_EMAIL_MESSAGE));
        assert_eq!(session.input(ListField::Emails), "not-an-email");
        assert!(session.draft().emails.is_empty());
    }

    #[test]
    fn test_email_without_tld_is_rejected_and_buffer_kept() {
        let mut session = editing();
        session.set_input(ListField::Emails, "a@b");

        assert!(session.commit_email_input().is_err());

        assert_eq!(session.input(ListField::Emails), "a@b");
        assert_eq!(session.email_error(), Some(INVALID_EMAIL_MESSAGE));
        assert!(session.draft().emails.is_empty());
    }

    #[test]
    fn test_valid_email_commit_clears_buffer_and_error() {
        let mut session = editing();
        session.set_input(ListField::Emails, "bad");
        let _ = session.commit_email_input();
        session.set_input(ListField::Emails, " ops@acme.com ");

        assert_eq!(session.commit_email_input().unwrap(), 1);
        assert_eq!(session.draft().emails, strings(&["ops@acme.com"]));
        assert_eq!(session.input(ListField::Emails), "");
        assert!(session.email_error().is_none());
    }

    #[test]
    fn test_commit_input_clears_non_email_buffer() {
        let mut session = editing();
        session.set_input(ListField::Poc, "D, A");
        assert_eq!(session.commit_input(ListField::Poc).unwrap(), 1);
        assert_eq!(session.draft().poc, strings(&["A", "B", "C", "D"]));
        assert_eq!(session.input(ListField::Poc), "");
    }

    #[test]
    fn test_remove_by_index() {
        let mut session = editing();
        assert_eq!(
            session.remove_array_field(ListField::Poc, 1),
            Some("B".to_string())
        );
        assert_eq!(session.draft().poc, strings(&["A", "C"]));
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut session = editing();
        assert_eq!(session.remove_array_field(ListField::Poc, 3), None);
        assert_eq!(session.draft().poc, strings(&["A", "B", "C"]));
    }

    #[test]
    fn test_cancel_restores_committed() {
        let mut session = editing();
        session.update_field(TextField::CompanyDescription, "Changed");
        session.handle_array_field(ListField::Tier2Keywords, "x").unwrap();
        session.set_input(ListField::Tier1Keywords, "pending");

        session.close_edit_mode();

        assert!(!session.is_editing());
        assert_eq!(session.draft(), &sample_profile());
        assert_eq!(session.committed(), Some(&sample_profile()));
        assert_eq!(session.input(ListField::Tier1Keywords), "");
    }

    #[test]
    fn test_save_commits_description() {
        let mut session = editing();
        session.update_field(TextField::CompanyDescription, "New description");
        session.toggle_edit_mode().unwrap();

        assert!(!session.is_editing());
        let current = session.current().unwrap();
        assert_eq!(current.company_description, "New description");
        assert_eq!(current.company_name, "Acme");
    }

    #[test]
    fn test_save_merges_pending_buffers() {
        let mut session = editing();
        session.set_input(ListField::Tier1Keywords, "widgets, gears");
        session.set_input(ListField::Tier2Keywords, "  ");
        session.set_input(ListField::Emails, "sales@acme.com");
        session.set_input(ListField::Poc, "D");

        session.toggle_edit_mode().unwrap();

        let committed = session.committed().unwrap();
        assert_eq!(committed.tier1_keywords, strings(&["widgets", "gears"]));
        assert!(committed.tier2_keywords.is_empty());
        assert_eq!(committed.emails, strings(&["sales@acme.com"]));
        assert_eq!(committed.poc, strings(&["A", "B", "C", "D"]));
    }

    #[test]
    fn test_save_with_invalid_email_buffer_is_refused() {
        let mut session = editing();
        session.update_field(TextField::CompanyName, "Renamed");
        session.set_input(ListField::Poc, "D");
        session.set_input(ListField::Emails, "nope");

        assert!(session.toggle_edit_mode().is_err());

        assert!(session.is_editing());
        assert_eq!(session.committed(), Some(&sample_profile()));
        assert_eq!(session.draft().poc, strings(&["A", "B", "C"]));
        assert_eq!(session.email_error(), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_save_without_committed_profile_commits_draft() {
        let mut session = EditSession::default();
        session.toggle_edit_mode().unwrap();
        session.update_field(TextField::CompanyName, "Fresh");
        session.toggle_edit_mode().unwrap();
        assert_eq!(session.committed().unwrap().company_name, "Fresh");
    }

    #[test]
    fn test_edits_are_ignored_in_view_mode() {
        let mut session = EditSession::new(Some(sample_profile()));
        session.update_field(TextField::CompanyName, "Nope");
        assert_eq!(session.handle_array_field(ListField::Poc, "Z").unwrap(), 0);
        assert_eq!(session.remove_array_field(ListField::Poc, 0), None);
        session.set_input(ListField::Poc, "ignored");

        assert_eq!(session.draft(), &sample_profile());
        assert_eq!(session.input(ListField::Poc), "");
    }

    #[test]
    fn test_load_generated_replaces_committed_and_leaves_edit_mode() {
        let mut session = editing();
        session.update_field(TextField::CompanyName, "Draft");
        let fresh = CompanyProfile {
            company_name: "Globex".to_string(),
            ..Default::default()
        };

        session.load_generated(fresh.clone());

        assert!(!session.is_editing());
        assert_eq!(session.committed(), Some(&fresh));
        assert_eq!(session.draft(), &fresh);
    }
}
