//! Item Repository
//!
//! In-memory implementation of the item store. Every operation takes the
//! list lock for its full read-modify-write, which serializes concurrent
//! requests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::domain::{DomainResult, Item, ItemIndex, ItemList};
use super::traits::{Repository, ToggleRepository};

#[derive(Clone, Default)]
pub struct ItemRepository {
    list: Arc<Mutex<ItemList>>,
}

impl ItemRepository {
    pub fn new(list: Arc<Mutex<ItemList>>) -> Self {
        Self { list }
    }

    /// Start from an empty list
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Append an item built from raw text
    pub async fn add_text(&self, text: impl Into<String>) -> Item {
        let mut list = self.list.lock().await;
        list.append(text).clone()
    }

    /// Toggle by the raw index string submitted by a client.
    ///
    /// Unparseable and out-of-range input leaves the list unchanged and
    /// yields `Ok(None)`.
    pub async fn toggle_raw(&self, raw: &str) -> DomainResult<Option<Item>> {
        let index = match raw.parse::<ItemIndex>() {
            Ok(index) => index,
            Err(e) => {
                log::debug!("ignoring toggle: {}", e);
                return Ok(None);
            }
        };

        let toggled = self.toggle_at(index).await?;
        if toggled.is_none() {
            log::debug!("ignoring toggle: index {} out of range", index);
        }
        Ok(toggled)
    }
}

#[async_trait]
impl Repository<Item> for ItemRepository {
    /// Only the text is taken from `entity`; appended items always start not done.
    async fn append(&self, entity: Item) -> DomainResult<Item> {
        Ok(self.add_text(entity.text().to_owned()).await)
    }

    async fn list(&self) -> DomainResult<Vec<Item>> {
        let list = self.list.lock().await;
        Ok(list.snapshot())
    }
}

#[async_trait]
impl ToggleRepository<Item> for ItemRepository {
    async fn toggle_at(&self, id: ItemIndex) -> DomainResult<Option<Item>> {
        let mut list = self.list.lock().await;
        Ok(list.toggle_at(id).cloned())
    }
}
