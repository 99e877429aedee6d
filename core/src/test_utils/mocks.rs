//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{ItemFields, ItemId, NewShoppingItem, OwnerId, ShoppingListItem};
use crate::domain::ports::{Clipboard, RemoteOp, ShoppingListGateway};
use crate::error::{ClipboardError, GatewayError};

// ============================================================================
// In-Memory Gateway
// ============================================================================

#[derive(Default)]
pub struct InMemoryGateway {
    items: Arc<RwLock<Vec<ShoppingListItem>>>,
    next_id: Arc<RwLock<i64>>,
    failing: Arc<RwLock<HashSet<RemoteOp>>>,
    malformed: Arc<RwLock<HashSet<RemoteOp>>>,
    pub calls: Arc<RwLock<Vec<RemoteOp>>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the remote list; new ids continue after the highest one
    pub fn with_items(self, items: Vec<ShoppingListItem>) -> Self {
        {
            let max_id = items.iter().map(|i| i.id.0).max().unwrap_or(0);
            *self.next_id.write().unwrap() = max_id;
            *self.items.write().unwrap() = items;
        }
        self
    }

    /// Answer `op` with a non-success status
    pub fn failing_on(self, op: RemoteOp) -> Self {
        self.failing.write().unwrap().insert(op);
        self
    }

    /// Answer `op` with a success status and an unreadable payload
    pub fn malformed_on(self, op: RemoteOp) -> Self {
        self.malformed.write().unwrap().insert(op);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn remote_items(&self) -> Vec<ShoppingListItem> {
        self.items.read().unwrap().clone()
    }

    fn record(&self, op: RemoteOp) -> Result<(), GatewayError> {
        self.calls.write().unwrap().push(op);

        if self.failing.read().unwrap().contains(&op) {
            return Err(GatewayError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }
        if self.malformed.read().unwrap().contains(&op) {
            return Err(GatewayError::Deserialization(
                "expected value at line 1 column 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ShoppingListGateway for InMemoryGateway {
    async fn list(&self, owner: &OwnerId) -> Result<Vec<ShoppingListItem>, GatewayError> {
        self.record(RemoteOp::List)?;
        let items = self.items.read().unwrap();
        Ok(items
            .iter()
            .filter(|i| &i.user_id == owner)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        owner: &OwnerId,
        new_item: &NewShoppingItem,
    ) -> Result<ShoppingListItem, GatewayError> {
        self.record(RemoteOp::Create)?;

        let id = {
            let mut next_id = self.next_id.write().unwrap();
            *next_id += 1;
            *next_id
        };
        let item = ShoppingListItem {
            id: ItemId(id),
            priority: new_item.fields.priority,
            item: new_item.fields.item.clone(),
            quantity: new_item.fields.quantity,
            details: new_item.fields.details_opt().map(|d| d.to_string()),
            date: new_item.date,
            user_id: owner.clone(),
        };
        self.items.write().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        owner: &OwnerId,
        id: ItemId,
        fields: &ItemFields,
    ) -> Result<ShoppingListItem, GatewayError> {
        self.record(RemoteOp::Update)?;

        let mut items = self.items.write().unwrap();
        let existing = items
            .iter_mut()
            .find(|i| i.id == id && &i.user_id == owner)
            .ok_or_else(|| GatewayError::Api {
                status: 404,
                message: "Item not found".to_string(),
            })?;
        existing.priority = fields.priority;
        existing.item = fields.item.clone();
        existing.quantity = fields.quantity;
        existing.details = fields.details_opt().map(|d| d.to_string());
        Ok(existing.clone())
    }

    async fn delete(&self, owner: &OwnerId, id: ItemId) -> Result<(), GatewayError> {
        self.record(RemoteOp::Delete)?;
        self.items
            .write()
            .unwrap()
            .retain(|i| !(i.id == id && &i.user_id == owner));
        Ok(())
    }

    async fn delete_all(&self, owner: &OwnerId) -> Result<(), GatewayError> {
        self.record(RemoteOp::DeleteAll)?;
        self.items.write().unwrap().retain(|i| &i.user_id != owner);
        Ok(())
    }
}

// ============================================================================
// Mock Clipboard
// ============================================================================

#[derive(Default)]
pub struct MockClipboard {
    pub written: Arc<RwLock<Vec<String>>>,
    should_fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            written: Arc::new(RwLock::new(Vec::new())),
            should_fail: true,
        }
    }
}

#[async_trait]
impl Clipboard for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.should_fail {
            return Err(ClipboardError::Write("Mock clipboard rejected write".to_string()));
        }
        self.written.write().unwrap().push(text.to_string());
        Ok(())
    }
}
