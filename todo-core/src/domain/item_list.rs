//! Item List
//!
//! Append-only ordered sequence of items. Items are never removed or
//! reordered, so a position stays valid once it has been handed out.

use super::item::Item;
use super::item_index::ItemIndex;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item at the end and return it
    pub fn append(&mut self, text: impl Into<String>) -> &Item {
        self.items.push(Item::new(text));
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Flip the completion flag at `index`.
    ///
    /// Out-of-range positions leave the list untouched and return `None`.
    pub fn toggle_at(&mut self, index: ItemIndex) -> Option<&Item> {
        let item = self.items.get_mut(index.get())?;
        item.toggle();
        Some(item)
    }

    /// Owned copy of the current contents, in insertion order
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list_of(texts: &[&str]) -> ItemList {
        let mut list = ItemList::new();
        for text in texts {
            list.append(*text);
        }
        list
    }

    fn entry(text: &str, done: bool) -> Item {
        let mut item = Item::new(text);
        item.done = done;
        item
    }

    #[test]
    fn test_append_to_empty_list() {
        let mut list = ItemList::new();
        list.append("buy milk");
        assert_eq!(list.snapshot(), vec![entry("buy milk", false)]);
    }

    #[test]
    fn test_toggle_second_item() {
        let mut list = list_of(&["a", "b"]);
        let toggled = list.toggle_at(ItemIndex::new(1)).cloned();
        assert_eq!(toggled, Some(entry("b", true)));
        assert_eq!(list.snapshot(), vec![entry("a", false), entry("b", true)]);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();
        assert!(list.toggle_at(ItemIndex::new(5)).is_none());
        assert!(list.toggle_at(ItemIndex::new(2)).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_on_empty_list_is_noop() {
        let mut list = ItemList::new();
        assert!(list.toggle_at(ItemIndex::new(0)).is_none());
        assert!(list.snapshot().is_empty());
    }

    #[test]
    fn test_indices_survive_appends() {
        let mut list = list_of(&["first"]);
        list.append("second");
        list.toggle_at(ItemIndex::new(0));
        assert_eq!(list.snapshot(), vec![entry("first", true), entry("second", false)]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut list = list_of(&["a"]);
        let snapshot = list.snapshot();
        list.toggle_at(ItemIndex::new(0));
        assert!(!snapshot[0].done);
        assert_eq!(list.snapshot().iter().filter(|item| item.done).count(), 1);
    }

    proptest! {
        #[test]
        fn prop_append_grows_by_one(existing in proptest::collection::vec(".*", 0..8), text in ".*") {
            let mut list = ItemList::new();
            for t in &existing {
                list.append(t.clone());
            }
            let before = list.snapshot().len();
            list.append(text.clone());
            prop_assert_eq!(list.snapshot().len(), before + 1);
            let last = list.snapshot().pop().unwrap();
            prop_assert_eq!(last.text(), text.as_str());
            prop_assert!(!last.done);
        }

        #[test]
        fn prop_append_preserves_order(a in ".*", b in ".*") {
            let mut list = list_of(&["seed"]);
            list.append(a.clone());
            list.append(b.clone());
            let texts: Vec<String> = list.snapshot().iter().map(|item| item.text().to_string()).collect();
            prop_assert_eq!(texts, vec!["seed".to_string(), a, b]);
        }

        #[test]
        fn prop_double_toggle_restores(len in 1usize..16, pick in any::<usize>(), pre_toggle in any::<bool>()) {
            let mut list = ItemList::new();
            for i in 0..len {
                list.append(format!("item {}", i));
            }
            let index = ItemIndex::new(pick % len);
            if pre_toggle {
                list.toggle_at(index);
            }
            let before = list.clone();
            list.toggle_at(index);
            list.toggle_at(index);
            prop_assert_eq!(list, before);
        }

        #[test]
        fn prop_out_of_range_toggle_is_noop(len in 0usize..8, offset in 0usize..1000) {
            let mut list = ItemList::new();
            for i in 0..len {
                list.append(format!("item {}", i));
            }
            let before = list.clone();
            prop_assert!(list.toggle_at(ItemIndex::new(len + offset)).is_none());
            prop_assert_eq!(list, before);
        }
    }
}
