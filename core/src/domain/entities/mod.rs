//! Domain entities

pub mod owner;
pub mod shopping_item;

pub use owner::OwnerId;
pub use shopping_item::{
    ItemFields, ItemId, NewShoppingItem, ShoppingListItem, Urgency, DEFAULT_PRIORITY,
    DEFAULT_QUANTITY, NO_DESCRIPTION,
};
