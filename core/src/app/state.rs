//! List state and its transition function
//!
//! `transition` is pure: it takes the current state and a command and
//! returns the next state plus the effects a driver must perform. Remote
//! results come back in as commands (`Loaded`, `Created`, ...), so local
//! state only changes once the server has confirmed an operation.
//!
//! Load results are fenced by a generation counter. Every load request and
//! every confirmed mutation bumps it, and a `Loaded` carrying an older
//! generation is dropped instead of overwriting newer local state.

use chrono::{DateTime, Utc};

use super::editor::{EditController, EditMode};
use super::formatter::format_export;
use super::list_store::ListStore;
use crate::domain::entities::{ItemFields, ItemId, ShoppingListItem};
use crate::domain::ports::RemoteOp;
use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    store: ListStore,
    editor: EditController,
    generation: u64,
    pending_load: Option<u64>,
    in_flight: Option<RemoteOp>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        self.store.items()
    }

    pub fn editor(&self) -> &EditController {
        &self.editor
    }

    pub fn form(&self) -> &ItemFields {
        self.editor.form()
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.editor.selected_id()
    }

    pub fn selected_item(&self) -> Option<&ShoppingListItem> {
        self.selected_id().and_then(|id| self.store.get(id))
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_editing()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a list fetch is outstanding
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// The mutation currently awaiting the server, if any
    pub fn in_flight(&self) -> Option<RemoteOp> {
        self.in_flight
    }

    fn ensure_idle_flight(&self) -> Result<(), AppError> {
        match self.in_flight {
            Some(op) => Err(AppError::Busy(op)),
            None => Ok(()),
        }
    }

    fn confirm(&mut self) {
        self.in_flight = None;
        self.generation += 1;
    }
}

/// Inputs to the state machine: user intents and remote results
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Request a fresh copy of the list
    BeginLoad,
    SelectItem(ItemId),
    ClearSelection,
    /// Replace the form fields without submitting
    EditForm(ItemFields),
    /// Submit the current form: create while idle, update while editing
    Submit,
    SubmitCreate(ItemFields),
    SubmitUpdate(ItemFields),
    Delete(ItemId),
    ClearAll,
    Export { at: DateTime<Utc> },

    Loaded {
        generation: u64,
        items: Vec<ShoppingListItem>,
    },
    Created(ShoppingListItem),
    Updated {
        id: ItemId,
        item: ShoppingListItem,
    },
    Deleted(ItemId),
    ClearedAll,
    RemoteFailed(RemoteOp),
}

/// Work a driver has to perform after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchList { generation: u64 },
    /// Fields are already validated; the driver stamps the creation date
    CreateItem(ItemFields),
    UpdateItem { id: ItemId, fields: ItemFields },
    DeleteItem(ItemId),
    DeleteAll,
    WriteClipboard(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ListState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn quiet(state: ListState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with(state: ListState, effect: Effect) -> Self {
        Self {
            state,
            effects: vec![effect],
        }
    }
}

/// Compute the next state for `command`
///
/// On error the caller keeps `state` as it was; no effect is produced.
pub fn transition(state: &ListState, command: Command) -> Result<Transition, AppError> {
    let mut next = state.clone();

    match command {
        Command::BeginLoad => {
            next.generation += 1;
            let generation = next.generation;
            next.pending_load = Some(generation);
            Ok(Transition::with(next, Effect::FetchList { generation }))
        }

        Command::SelectItem(id) => {
            let item = next
                .store
                .get(id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("No item with id {}", id)))?;
            next.editor.begin_edit(&item);
            Ok(Transition::quiet(next))
        }

        Command::ClearSelection => {
            next.editor.reset();
            Ok(Transition::quiet(next))
        }

        Command::EditForm(fields) => {
            next.editor.set_form(fields);
            Ok(Transition::quiet(next))
        }

        Command::Submit => match next.editor.mode() {
            EditMode::Idle => begin_create(next),
            EditMode::Editing(id) => begin_update(next, id),
        },

        Command::SubmitCreate(fields) => {
            if next.editor.is_editing() {
                return Err(AppError::InvalidState(
                    "An item is being edited. Submit an update or clear the selection first."
                        .to_string(),
                ));
            }
            next.editor.set_form(fields);
            begin_create(next)
        }

        Command::SubmitUpdate(fields) => {
            let id = next
                .editor
                .selected_id()
                .ok_or_else(|| AppError::InvalidState("No item is selected.".to_string()))?;
            next.editor.set_form(fields);
            begin_update(next, id)
        }

        Command::Delete(id) => {
            next.ensure_idle_flight()?;
            if !next.store.contains(id) {
                return Err(AppError::NotFound(format!("No item with id {}", id)));
            }
            next.in_flight = Some(RemoteOp::Delete);
            Ok(Transition::with(next, Effect::DeleteItem(id)))
        }

        Command::ClearAll => {
            next.ensure_idle_flight()?;
            if next.store.is_empty() {
                return Err(AppError::Validation(
                    "The shopping list is already empty.".to_string(),
                ));
            }
            next.in_flight = Some(RemoteOp::DeleteAll);
            Ok(Transition::with(next, Effect::DeleteAll))
        }

        Command::Export { at } => {
            if next.store.is_empty() {
                return Err(AppError::Validation(
                    "There is nothing to copy: the shopping list is empty.".to_string(),
                ));
            }
            let text = format_export(next.store.items(), at);
            Ok(Transition::with(next, Effect::WriteClipboard(text)))
        }

        Command::Loaded { generation, items } => {
            if next.pending_load == Some(generation) {
                next.pending_load = None;
            }
            if generation != next.generation {
                tracing::warn!(
                    loaded = generation,
                    current = next.generation,
                    "Discarding stale list load"
                );
                return Ok(Transition::quiet(next));
            }
            next.store.load(items);
            if let Some(id) = next.editor.selected_id() {
                if !next.store.contains(id) {
                    next.editor.reset();
                }
            }
            Ok(Transition::quiet(next))
        }

        Command::Created(item) => {
            let id = item.id;
            next.confirm();
            if next.store.append(item) {
                tracing::info!(id = %id, "Item created");
            }
            next.editor.reset();
            Ok(Transition::quiet(next))
        }

        Command::Updated { id, item } => {
            next.confirm();
            if next.store.replace(id, item) {
                tracing::info!(id = %id, "Item updated");
            }
            if next.editor.is_selected(id) {
                next.editor.reset();
            }
            Ok(Transition::quiet(next))
        }

        Command::Deleted(id) => {
            next.confirm();
            if next.store.remove(id).is_some() {
                tracing::info!(id = %id, "Item deleted");
            }
            if next.editor.is_selected(id) {
                next.editor.reset();
            }
            Ok(Transition::quiet(next))
        }

        Command::ClearedAll => {
            next.confirm();
            next.store.clear();
            next.editor.reset();
            tracing::info!("Shopping list cleared");
            Ok(Transition::quiet(next))
        }

        Command::RemoteFailed(op) => {
            match op {
                RemoteOp::List => next.pending_load = None,
                _ => next.in_flight = None,
            }
            Ok(Transition::quiet(next))
        }
    }
}

fn begin_create(mut next: ListState) -> Result<Transition, AppError> {
    next.ensure_idle_flight()?;
    let fields = next.editor.form().validate()?;
    next.in_flight = Some(RemoteOp::Create);
    Ok(Transition::with(next, Effect::CreateItem(fields)))
}

fn begin_update(mut next: ListState, id: ItemId) -> Result<Transition, AppError> {
    next.ensure_idle_flight()?;
    if !next.store.contains(id) {
        return Err(AppError::NotFound(format!("No item with id {}", id)));
    }
    let fields = next.editor.form().validate()?;
    next.in_flight = Some(RemoteOp::Update);
    Ok(Transition::with(next, Effect::UpdateItem { id, fields }))
}
