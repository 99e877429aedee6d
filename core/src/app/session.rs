//! Shopping list session
//!
//! Command handlers for one owner's list. Each handler runs the pure
//! `transition`, performs the resulting effects against the gateway or the
//! clipboard, and feeds the remote result back in as a command. Handlers
//! take `&mut self`, so at most one remote call is outstanding per session.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::state::{transition, Command, Effect, ListState, Transition};
use crate::domain::entities::{ItemFields, ItemId, NewShoppingItem, OwnerId, ShoppingListItem};
use crate::domain::ports::{Clipboard, RemoteOp, ShoppingListGateway};
use crate::error::{AppError, GatewayError};

/// What a successful command did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Loaded { count: usize },
    Selected(ItemId),
    SelectionCleared,
    FormUpdated,
    Created(ShoppingListItem),
    Updated(ShoppingListItem),
    Deleted(ItemId),
    Cleared,
    Copied,
}

impl Outcome {
    /// Notice shown to the user, if this outcome warrants one
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Created(_) => Some("Item added."),
            Outcome::Updated(_) => Some("Item updated."),
            Outcome::Deleted(_) => Some("Item deleted."),
            Outcome::Cleared => Some("Shopping list cleared successfully."),
            Outcome::Copied => Some("Copied to Clipboard successfully!"),
            _ => None,
        }
    }
}

/// Drives the list state for one owner
pub struct Session<G, C>
where
    G: ShoppingListGateway,
    C: Clipboard,
{
    owner: OwnerId,
    gateway: Arc<G>,
    clipboard: Arc<C>,
    state: ListState,
}

impl<G, C> Session<G, C>
where
    G: ShoppingListGateway,
    C: Clipboard,
{
    pub fn new(owner: OwnerId, gateway: Arc<G>, clipboard: Arc<C>) -> Self {
        Self {
            owner,
            gateway,
            clipboard,
            state: ListState::new(),
        }
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Fetch the list and replace the local copy
    pub async fn load(&mut self) -> Result<Outcome, AppError> {
        self.dispatch(Command::BeginLoad).await
    }

    pub fn select_item(&mut self, id: ItemId) -> Result<Outcome, AppError> {
        self.apply(Command::SelectItem(id))?;
        Ok(Outcome::Selected(id))
    }

    pub fn clear_selection(&mut self) -> Outcome {
        // ClearSelection cannot fail
        let _ = self.apply(Command::ClearSelection);
        Outcome::SelectionCleared
    }

    pub fn edit_form(&mut self, fields: ItemFields) -> Outcome {
        let _ = self.apply(Command::EditForm(fields));
        Outcome::FormUpdated
    }

    /// Submit `fields`: creates while idle, updates while editing
    pub async fn submit(&mut self, fields: ItemFields) -> Result<Outcome, AppError> {
        if self.state.is_editing() {
            self.submit_update(fields).await
        } else {
            self.submit_create(fields).await
        }
    }

    pub async fn submit_create(&mut self, fields: ItemFields) -> Result<Outcome, AppError> {
        self.dispatch(Command::SubmitCreate(fields)).await
    }

    pub async fn submit_update(&mut self, fields: ItemFields) -> Result<Outcome, AppError> {
        self.dispatch(Command::SubmitUpdate(fields)).await
    }

    pub async fn delete_item(&mut self, id: ItemId) -> Result<Outcome, AppError> {
        self.dispatch(Command::Delete(id)).await
    }

    pub async fn delete_selected(&mut self) -> Result<Outcome, AppError> {
        let id = self
            .state
            .selected_id()
            .ok_or_else(|| AppError::InvalidState("No item is selected.".to_string()))?;
        self.delete_item(id).await
    }

    pub async fn clear_all(&mut self) -> Result<Outcome, AppError> {
        self.dispatch(Command::ClearAll).await
    }

    /// Export the list as of `at` to the clipboard
    pub async fn copy_to_clipboard(&mut self, at: DateTime<Utc>) -> Result<Outcome, AppError> {
        self.dispatch(Command::Export { at }).await
    }

    async fn dispatch(&mut self, command: Command) -> Result<Outcome, AppError> {
        let effects = self.apply(command)?;

        let mut outcome = Outcome::FormUpdated;
        for effect in effects {
            outcome = self.run(effect).await?;
        }
        Ok(outcome)
    }

    /// Apply a command locally and return the effects it asks for
    fn apply(&mut self, command: Command) -> Result<Vec<Effect>, AppError> {
        let Transition { state, effects } = transition(&self.state, command)?;
        self.state = state;
        Ok(effects)
    }

    async fn run(&mut self, effect: Effect) -> Result<Outcome, AppError> {
        match effect {
            Effect::FetchList { generation } => {
                tracing::debug!(owner = %self.owner, generation, "Fetching shopping list");
                match self.gateway.list(&self.owner).await {
                    Ok(items) => {
                        self.apply(Command::Loaded { generation, items })?;
                        Ok(Outcome::Loaded {
                            count: self.state.store().len(),
                        })
                    }
                    Err(e) => self.fail(RemoteOp::List, e),
                }
            }

            Effect::CreateItem(fields) => {
                let new_item = NewShoppingItem::new(fields, Utc::now());
                tracing::debug!(owner = %self.owner, item = %new_item.fields.item, "Creating item");
                match self.gateway.create(&self.owner, &new_item).await {
                    Ok(item) => {
                        self.apply(Command::Created(item.clone()))?;
                        Ok(Outcome::Created(item))
                    }
                    Err(e) => self.fail(RemoteOp::Create, e),
                }
            }

            Effect::UpdateItem { id, fields } => {
                tracing::debug!(owner = %self.owner, id = %id, "Updating item");
                match self.gateway.update(&self.owner, id, &fields).await {
                    Ok(item) => {
                        self.apply(Command::Updated {
                            id,
                            item: item.clone(),
                        })?;
                        Ok(Outcome::Updated(item))
                    }
                    Err(e) => self.fail(RemoteOp::Update, e),
                }
            }

            Effect::DeleteItem(id) => {
                tracing::debug!(owner = %self.owner, id = %id, "Deleting item");
                match self.gateway.delete(&self.owner, id).await {
                    Ok(()) => {
                        self.apply(Command::Deleted(id))?;
                        Ok(Outcome::Deleted(id))
                    }
                    Err(e) => self.fail(RemoteOp::Delete, e),
                }
            }

            Effect::DeleteAll => {
                tracing::debug!(owner = %self.owner, "Clearing shopping list");
                match self.gateway.delete_all(&self.owner).await {
                    Ok(()) => {
                        self.apply(Command::ClearedAll)?;
                        Ok(Outcome::Cleared)
                    }
                    Err(e) => self.fail(RemoteOp::DeleteAll, e),
                }
            }

            Effect::WriteClipboard(text) => {
                self.clipboard.write_text(&text).await?;
                Ok(Outcome::Copied)
            }
        }
    }

    fn fail(&mut self, op: RemoteOp, source: GatewayError) -> Result<Outcome, AppError> {
        tracing::warn!(op = %op, error = %source, "Remote operation failed");
        self.apply(Command::RemoteFailed(op))?;
        Err(AppError::remote(op, source))
    }
}
