//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod item_repo;


pub use traits::{Repository, ToggleRepository};
pub use item_repo::ItemRepository;
