//! Field buffers of the content edit form.

use crate::domain::entities::ContentItem;

/// Labels of the form fields, in Tab order
pub const FIELD_LABELS: [&str; 3] = ["Name", "Categories", "Archived"];

pub const NAME_FIELD: usize = 0;
pub const CATEGORIES_FIELD: usize = 1;
pub const ARCHIVED_FIELD: usize = 2;

/// Edit buffers for one content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentForm {
    /// Name the item is stored under while the form is open
    pub original: String,
    pub fields: [String; 3],
    pub active: usize,
}

impl ContentForm {
    pub fn from_item(item: &ContentItem) -> Self {
        Self {
            original: item.name.clone(),
            fields: [
                item.name.clone(),
                item.categories_label(),
                item.archived.to_string(),
            ],
            active: NAME_FIELD,
        }
    }

    /// Cycle to the next field, wrapping after the last one
    pub fn advance(&mut self) {
        self.active = (self.active + 1) % self.fields.len();
    }

    /// Focus a field; out of range indexes are ignored
    pub fn focus(&mut self, index: usize) -> bool {
        if index < self.fields.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.fields[self.active].push(c);
    }

    pub fn backspace(&mut self) {
        self.fields[self.active].pop();
    }

    /// Overwrite a field buffer; out of range indexes are ignored
    pub fn set_field(&mut self, index: usize, value: String) -> bool {
        match self.fields.get_mut(index) {
            Some(field) => {
                *field = value;
                true
            }
            None => false,
        }
    }

    pub fn active_label(&self) -> &'static str {
        FIELD_LABELS[self.active]
    }

    /// Parse the buffers into an item.
    ///
    /// Categories are split on commas with blanks dropped. The archived flag
    /// is set only by a case-insensitive `true`. Names and categories are
    /// checked later against the store.
    pub fn to_item(&self) -> ContentItem {
        let categories = self.fields[CATEGORIES_FIELD]
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty());
        let archived = self.fields[ARCHIVED_FIELD]
            .trim()
            .eq_ignore_ascii_case("true");
        ContentItem::new(self.fields[NAME_FIELD].trim(), categories).archived(archived)
    }
}
