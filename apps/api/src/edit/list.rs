//! The one editable unique-item list used by every sequence field.

/// Splits comma-separated input into trimmed, non-empty tokens, in input order.
pub fn parse_items(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Mutable view over a profile sequence that enforces insert-time uniqueness.
pub struct EditableList<'a> {
    items: &'a mut Vec<String>,
}

impl<'a> EditableList<'a> {
    pub fn new(items: &'a mut Vec<String>) -> Self {
        Self { items }
    }

    /// Appends tokens not already present (case-sensitive), keeping existing order and
    /// the tokens' own order. Returns how many were added.
    pub fn add_items(&mut self, new_items: Vec<String>) -> usize {
        let before = self.items.len();
        for item in new_items {
            if !self.items.contains(&item) {
                self.items.push(item);
            }
        }
        self.items.len() - before
    }

    /// `add_items` over the comma-split form of `value`.
    pub fn add(&mut self, value: &str) -> usize {
        self.add_items(parse_items(value))
    }

    /// Removes the element at `index`; out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}
