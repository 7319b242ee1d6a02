// 🗃️ Inventory Repository - keyed by item id
//
// Invariants:
// - ids are unique within one repository
// - iteration order is insertion order (removals keep the order of the rest)
// - quantities are never negative after an update

use indexmap::IndexMap;

use crate::error::InventoryError;
use crate::warehouse::item::InventoryItem;

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Generic in-memory repository, instantiated once per item shape
#[derive(Debug, Clone)]
pub struct InventoryRepository<T: InventoryItem> {
    items: IndexMap<u32, T>,
}

impl<T: InventoryItem> InventoryRepository<T> {
    pub fn new() -> Self {
        InventoryRepository {
            items: IndexMap::new(),
        }
    }

    /// Insert a new item; fails if the id is already stored
    pub fn add_item(&mut self, item: T) -> InventoryResult<()> {
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(InventoryError::DuplicateItem(id));
        }
        self.items.insert(id, item);
        tracing::debug!(kind = T::KIND, id, "item added");
        Ok(())
    }

    /// Stored item by id
    pub fn get_item_by_id(&self, id: u32) -> InventoryResult<&T> {
        self.items.get(&id).ok_or(InventoryError::ItemNotFound(id))
    }

    /// Stored item by id, mutable
    pub fn get_item_by_id_mut(&mut self, id: u32) -> InventoryResult<&mut T> {
        self.items
            .get_mut(&id)
            .ok_or(InventoryError::ItemNotFound(id))
    }

    pub fn remove_item(&mut self, id: u32) -> InventoryResult<()> {
        match self.items.shift_remove(&id) {
            Some(_) => {
                tracing::debug!(kind = T::KIND, id, "item removed");
                Ok(())
            }
            None => Err(InventoryError::ItemNotFound(id)),
        }
    }

    /// Snapshot of all items in insertion order
    pub fn get_all_items(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    /// Set the stored quantity in place and return the updated item
    ///
    /// Negative quantities are rejected before the id is looked up.
    pub fn update_quantity(&mut self, id: u32, new_quantity: i32) -> InventoryResult<&T> {
        if new_quantity < 0 {
            return Err(InventoryError::InvalidQuantity);
        }

        let item = self.get_item_by_id_mut(id)?;
        item.set_quantity(new_quantity);
        tracing::debug!(kind = T::KIND, id, quantity = new_quantity, "quantity updated");

        Ok(&*item)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: InventoryItem> Default for InventoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
