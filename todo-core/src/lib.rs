//! Todo Core
//!
//! Layered architecture:
//! - domain: Item, positions and the append-only item list
//! - repository: async store abstractions and the in-memory implementation

pub mod domain;
pub mod repository;

pub use domain::{DomainError, DomainResult, Entity, Item, ItemIndex, ItemList};
pub use repository::{ItemRepository, Repository, ToggleRepository};
