use crate::edit::list::EditableList;

/// Service lines with their own input box, independent of the edit session.
#[derive(Debug, Clone, Default)]
pub struct ServiceLineManager {
    service_lines: Vec<String>,
    current: String,
}

impl ServiceLineManager {
    pub fn new(initial: Vec<String>) -> Self {
        Self {
            service_lines: initial,
            current: String::new(),
        }
    }

    pub fn service_lines(&self) -> &[String] {
        &self.service_lines
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn set_current(&mut self, value: impl Into<String>) {
        self.current = value.into();
    }

    /// Adds the current input; it is cleared only when something new was added.
    pub fn add_current(&mut self) -> usize {
        let added = EditableList::new(&mut self.service_lines).add(&self.current);
        if added > 0 {
            self.current.clear();
        }
        added
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        EditableList::new(&mut self.service_lines).remove(index)
    }
}
