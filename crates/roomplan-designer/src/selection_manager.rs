use crate::scene_store::SceneStore;
use roomplan_core::ItemId;

/// Tracks the single selected item.
///
/// Selection is mutually exclusive: selecting an item replaces any previous
/// selection. Ids that are not in the store are never recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected_id: Option<ItemId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected_id
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected_id == Some(id)
    }

    pub fn has_selection(&self) -> bool {
        self.selected_id.is_some()
    }

    /// Selects `id` if it exists in `store`. Returns whether the selection
    /// now points at `id`.
    pub fn select(&mut self, store: &SceneStore, id: ItemId) -> bool {
        if store.contains(id) {
            self.selected_id = Some(id);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Drops the selection if it points at `id`.
    pub fn forget(&mut self, id: ItemId) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::PlacedItem;
    use roomplan_core::{Dimensions, FurnitureDefinition};

    fn store_with(n: usize) -> (SceneStore, Vec<ItemId>) {
        let mut store = SceneStore::new();
        let mut ids = Vec::new();
        for i in 0..n {
            let item = PlacedItem::new(
                FurnitureDefinition::new(format!("d{i}"), "Item", "test"),
                Dimensions::unit(),
            );
            ids.push(item.id);
            store.insert(item);
        }
        (store, ids)
    }

    #[test]
    fn test_selection_is_exclusive() {
        let (store, ids) = store_with(2);
        let mut selection = SelectionManager::new();

        assert!(selection.select(&store, ids[0]));
        assert!(selection.select(&store, ids[1]));
        assert!(selection.is_selected(ids[1]));
        assert!(!selection.is_selected(ids[0]));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let (store, ids) = store_with(1);
        let mut selection = SelectionManager::new();
        selection.select(&store, ids[0]);

        assert!(!selection.select(&store, ItemId::new()));
        assert_eq!(selection.selected_id(), Some(ids[0]));
    }

    #[test]
    fn test_forget_only_matching() {
        let (store, ids) = store_with(2);
        let mut selection = SelectionManager::new();
        selection.select(&store, ids[0]);

        selection.forget(ids[1]);
        assert!(selection.has_selection());
        selection.forget(ids[0]);
        assert!(!selection.has_selection());
    }
}
