//! Selection/edit controller
//!
//! Two states: `Idle` (form holds create defaults) and `Editing` (form
//! pre-filled from the selected item). Submitting creates while idle and
//! updates while editing.

use crate::domain::entities::{ItemFields, ItemId, ShoppingListItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(ItemId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditController {
    mode: EditMode,
    form: ItemFields,
}

impl EditController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn form(&self) -> &ItemFields {
        &self.form
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        match self.mode {
            EditMode::Idle => None,
            EditMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected_id() == Some(id)
    }

    /// Idle -> Editing, copying the item's fields into the form
    pub fn begin_edit(&mut self, item: &ShoppingListItem) {
        self.mode = EditMode::Editing(item.id);
        self.form = ItemFields::from_item(item);
    }

    pub fn set_form(&mut self, fields: ItemFields) {
        self.form = fields;
    }

    /// Back to Idle with create defaults
    pub fn reset(&mut self) {
        self.mode = EditMode::Idle;
        self.form = ItemFields::default();
    }
}
