use crate::item::PlacedItem;
use roomplan_core::ItemId;

/// Ordered storage of the items in a scene.
///
/// Iteration follows insertion order. Order carries no meaning beyond
/// rendering; lookups are linear, which is fine for the tens of items a
/// room holds.
#[derive(Debug, Clone, Default)]
pub struct SceneStore {
    items: Vec<PlacedItem>,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item`. An item with the same id is replaced in place.
    pub fn insert(&mut self, item: PlacedItem) {
        match self.position_of(item.id) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }

    /// Re-inserts a previously removed item at its old index (clamped to
    /// the current length). Used by undo so iteration order is preserved.
    pub fn insert_at(&mut self, index: usize, item: PlacedItem) {
        if let Some(existing) = self.position_of(item.id) {
            self.items.remove(existing);
        }
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    pub fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position_of(id).is_some()
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<PlacedItem> {
        self.position_of(id).map(|index| self.items.remove(index))
    }

    /// Removes and returns the item together with its index.
    pub fn remove_indexed(&mut self, id: ItemId) -> Option<(usize, PlacedItem)> {
        self.position_of(id)
            .map(|index| (index, self.items.remove(index)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.iter()
    }

    /// Every item except `id`: the set a moving item is validated against.
    pub fn others(&self, id: ItemId) -> impl Iterator<Item = &PlacedItem> {
        self.items.iter().filter(move |item| item.id != id)
    }

    pub fn as_slice(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Takes all items out, leaving the store empty.
    pub fn drain(&mut self) -> Vec<PlacedItem> {
        std::mem::take(&mut self.items)
    }
}
