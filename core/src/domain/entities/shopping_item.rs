//! Shopping list item entity
//!
//! Items are owned by the remote resource: ids and creation dates come from
//! the server and are never assigned locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OwnerId;
use crate::error::AppError;

pub const DEFAULT_PRIORITY: i32 = 1;
pub const DEFAULT_QUANTITY: i32 = 1;

/// Shown in place of missing details
pub const NO_DESCRIPTION: &str = "No Description";

/// Server-assigned identifier for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Urgency level derived from an item's priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Normal,
    Important,
    Urgent,
}

impl Urgency {
    pub fn from_priority(priority: i32) -> Self {
        match priority {
            2 => Urgency::Important,
            p if p >= 3 => Urgency::Urgent,
            _ => Urgency::Normal,
        }
    }

    /// Export label, if this level carries one
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Urgency::Normal => None,
            Urgency::Important => Some("IMPORTANT"),
            Urgency::Urgent => Some("URGENT"),
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Normal => write!(f, "normal"),
            Urgency::Important => write!(f, "important"),
            Urgency::Urgent => write!(f, "urgent"),
        }
    }
}

/// A shopping list entry as confirmed by the remote resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: ItemId,
    pub priority: i32,
    pub item: String,
    pub quantity: i32,
    #[serde(default)]
    pub details: Option<String>,
    pub date: DateTime<Utc>,
    pub user_id: OwnerId,
}

impl ShoppingListItem {
    pub fn urgency(&self) -> Urgency {
        Urgency::from_priority(self.priority)
    }

    /// Details, if present and not blank
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref().filter(|d| !d.trim().is_empty())
    }

    pub fn details_or_placeholder(&self) -> &str {
        self.details().unwrap_or(NO_DESCRIPTION)
    }
}

/// User-editable fields of an item (the form)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub priority: i32,
    pub item: String,
    pub quantity: i32,
    pub details: String,
}

impl Default for ItemFields {
    fn default() -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            item: String::new(),
            quantity: DEFAULT_QUANTITY,
            details: String::new(),
        }
    }
}

impl ItemFields {
    /// Fields for a new item with the given name and defaults elsewhere
    pub fn named(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            ..Self::default()
        }
    }

    /// Copy an existing item's fields verbatim; missing details become empty
    pub fn from_item(item: &ShoppingListItem) -> Self {
        Self {
            priority: item.priority,
            item: item.item.clone(),
            quantity: item.quantity,
            details: item.details.clone().unwrap_or_default(),
        }
    }

    /// Trim the name and reject it if nothing is left
    pub fn validate(&self) -> Result<ItemFields, AppError> {
        let item = self.item.trim();
        if item.is_empty() {
            return Err(AppError::Validation(
                "Please enter a valid item name.".to_string(),
            ));
        }

        Ok(ItemFields {
            item: item.to_string(),
            ..self.clone()
        })
    }

    /// Details as sent over the wire: blank means absent
    pub fn details_opt(&self) -> Option<&str> {
        let details = self.details.trim();
        (!details.is_empty()).then_some(details)
    }
}

/// Payload for creating an item
#[derive(Debug, Clone, PartialEq)]
pub struct NewShoppingItem {
    pub fields: ItemFields,
    pub date: DateTime<Utc>,
}

impl NewShoppingItem {
    pub fn new(fields: ItemFields, date: DateTime<Utc>) -> Self {
        Self { fields, date }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_from_priority() {
        assert_eq!(Urgency::from_priority(0), Urgency::Normal);
        assert_eq!(Urgency::from_priority(1), Urgency::Normal);
        assert_eq!(Urgency::from_priority(2), Urgency::Important);
        assert_eq!(Urgency::from_priority(3), Urgency::Urgent);
        assert_eq!(Urgency::from_priority(7), Urgency::Urgent);
    }

    #[test]
    fn urgency_labels() {
        assert_eq!(Urgency::Normal.label(), None);
        assert_eq!(Urgency::Important.label(), Some("IMPORTANT"));
        assert_eq!(Urgency::Urgent.label(), Some("URGENT"));
    }

    #[test]
    fn item_deserializes_from_wire_format() {
        let json = r#"{
            "id": 7,
            "priority": 2,
            "item": "bread",
            "quantity": 1,
            "details": null,
            "date": "2026-10-18T09:30:00.000Z",
            "userId": "anon-1"
        }"#;
        let item: ShoppingListItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.user_id.as_str(), "anon-1");
        assert_eq!(item.details, None);
        assert_eq!(item.details_or_placeholder(), NO_DESCRIPTION);
    }

    #[test]
    fn missing_details_field_is_accepted() {
        let json = r#"{"id":1,"priority":1,"item":"milk","quantity":2,"date":"2026-10-18T09:30:00Z","userId":"u"}"#;
        let item: ShoppingListItem = serde_json::from_str(json).unwrap();
        assert!(item.details.is_none());
    }

    #[test]
    fn blank_details_count_as_absent() {
        let json = r#"{"id":1,"priority":1,"item":"milk","quantity":2,"details":"  ","date":"2026-10-18T09:30:00Z","userId":"u"}"#;
        let item: ShoppingListItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.details(), None);
    }

    #[test]
    fn default_fields() {
        let fields = ItemFields::default();
        assert_eq!(fields.priority, 1);
        assert_eq!(fields.quantity, 1);
        assert_eq!(fields.item, "");
        assert_eq!(fields.details, "");
    }

    #[test]
    fn validate_trims_name() {
        let fields = ItemFields::named("  eggs ");
        assert_eq!(fields.validate().unwrap().item, "eggs");
    }

    #[test]
    fn validate_rejects_whitespace_name() {
        let err = ItemFields::named("   ").validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn details_opt_treats_blank_as_none() {
        let mut fields = ItemFields::named("tea");
        assert_eq!(fields.details_opt(), None);
        fields.details = " green ".to_string();
        assert_eq!(fields.details_opt(), Some("green"));
    }
}
