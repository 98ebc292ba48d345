//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO async or I/O dependencies (only serde and thiserror).

mod entity;
mod item;
mod item_index;
mod item_list;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::Item;
pub use item_index::ItemIndex;
pub use item_list::ItemList;
