//! Remote sync gateway port
//!
//! The REST resource that owns the shopping list. The core only relies on
//! the result contracts: a payload on success, a `GatewayError` otherwise.

use async_trait::async_trait;

use crate::domain::entities::{ItemFields, ItemId, NewShoppingItem, OwnerId, ShoppingListItem};
use crate::error::GatewayError;

/// Remote operations, used for in-flight tracking and error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOp {
    List,
    Create,
    Update,
    Delete,
    DeleteAll,
}

impl RemoteOp {
    /// Message shown to the user when this operation fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            RemoteOp::List => "Failed to load your shopping list. Please try again.",
            RemoteOp::Create => "Failed to add item. Please try again.",
            RemoteOp::Update => "Failed to update item. Please try again.",
            RemoteOp::Delete => "Failed to delete item. Please try again.",
            RemoteOp::DeleteAll => "Failed to clear shopping list. Please try again.",
        }
    }
}

impl std::fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteOp::List => write!(f, "list"),
            RemoteOp::Create => write!(f, "create"),
            RemoteOp::Update => write!(f, "update"),
            RemoteOp::Delete => write!(f, "delete"),
            RemoteOp::DeleteAll => write!(f, "delete-all"),
        }
    }
}

/// Port trait for the remote shopping list resource
#[async_trait]
pub trait ShoppingListGateway: Send + Sync {
    /// Fetch every item for the owner, in server order
    async fn list(&self, owner: &OwnerId) -> Result<Vec<ShoppingListItem>, GatewayError>;

    /// Create an item; the server assigns its id
    async fn create(
        &self,
        owner: &OwnerId,
        item: &NewShoppingItem,
    ) -> Result<ShoppingListItem, GatewayError>;

    /// Replace the editable fields of an item
    async fn update(
        &self,
        owner: &OwnerId,
        id: ItemId,
        fields: &ItemFields,
    ) -> Result<ShoppingListItem, GatewayError>;

    /// Delete a single item
    async fn delete(&self, owner: &OwnerId, id: ItemId) -> Result<(), GatewayError>;

    /// Delete every item for the owner
    async fn delete_all(&self, owner: &OwnerId) -> Result<(), GatewayError>;
}
