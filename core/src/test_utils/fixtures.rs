//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{ItemId, OwnerId, ShoppingListItem};

pub fn test_owner() -> OwnerId {
    OwnerId::from("anon-test-owner")
}

/// Fixed reference time: Sun Oct 18 2026 09:30:00 UTC
pub fn test_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
}

/// Create a test item with default priority, quantity and no details
pub fn test_item(id: i64, name: &str) -> ShoppingListItem {
    test_item_with(id, name, 1, 1, None)
}

/// Create a test item with every editable field specified
pub fn test_item_with(
    id: i64,
    name: &str,
    quantity: i32,
    priority: i32,
    details: Option<&str>,
) -> ShoppingListItem {
    ShoppingListItem {
        id: ItemId(id),
        priority,
        item: name.to_string(),
        quantity,
        details: details.map(|d| d.to_string()),
        date: test_timestamp(),
        user_id: test_owner(),
    }
}
