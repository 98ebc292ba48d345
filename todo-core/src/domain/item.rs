//! Item Entity
//!
//! Represents a single todo entry: immutable text plus a completion flag.

use serde::Serialize;
use super::entity::Entity;
use super::item_index::ItemIndex;

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Item text content, fixed at creation
    text: String,
    /// Completion status
    pub done: bool,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Flip the completion flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}

impl Entity for Item {
    type Id = ItemIndex;
}
