//! Terminal renderer
//!
//! Renders the list state as plain text rows.

use speedlist_core::app::ListState;
use speedlist_core::domain::entities::{ItemFields, ShoppingListItem};

pub const LOADING_MESSAGE: &str = "Loading Your Speed List...";
pub const EMPTY_MESSAGE: &str = "No items found in your shopping list.";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render the whole list, marking the selected row with `*`
pub fn render_list(state: &ListState) -> String {
    if state.items().is_empty() {
        return if state.is_loading() {
            LOADING_MESSAGE.to_string()
        } else {
            EMPTY_MESSAGE.to_string()
        };
    }

    let selected = state.selected_id();
    state
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let marker = if selected == Some(item.id) { '*' } else { ' ' };
            format!("{} {}", marker, render_row(index + 1, item))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One row: `N. Name: .. | Priority: .. | Quantity: .. | Details: .. | Date: ..`
pub fn render_row(position: usize, item: &ShoppingListItem) -> String {
    let priority = match item.urgency().label() {
        Some(label) => format!("{} ({})", item.priority, label),
        None => item.priority.to_string(),
    };

    format!(
        "{}. Name: {} | Priority: {} | Quantity: {} | Details: {} | Date: {}",
        position,
        item.item,
        priority,
        item.quantity,
        item.details_or_placeholder(),
        item.date.format(DATE_FORMAT)
    )
}

/// Summary of the form while an item is selected
pub fn render_form(state: &ListState) -> Option<String> {
    let id = state.selected_id()?;
    let position = state.store().position(id).map(|p| p + 1)?;
    Some(format!(
        "Editing item {}: {}",
        position,
        render_fields(state.form())
    ))
}

fn render_fields(fields: &ItemFields) -> String {
    let details = match fields.details_opt() {
        Some(details) => details,
        None => "-",
    };
    format!(
        "name={:?} quantity={} priority={} details={}",
        fields.item, fields.quantity, fields.priority, details
    )
}
