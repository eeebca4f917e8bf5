use crate::domain::{Inventory, value_objects::{BookId, InventoryId}};
use crate::ports::inventory_repository::{InventoryRepository as InventoryRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// InventoryRepositoryのインメモリ実装
///
/// 本番と同じく書籍IDでの検索をサポートする（書籍と1対1）。
pub struct InventoryRepository {
    inventories: Mutex<HashMap<InventoryId, Inventory>>,
}

impl InventoryRepository {
    pub fn new() -> Self {
        Self {
            inventories: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InventoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InventoryRepositoryTrait for InventoryRepository {
    async fn create(&self, inventory: &Inventory) -> Result<()> {
        let mut inventories = self.inventories.lock().unwrap();
        inventories.insert(inventory.inventory_id, inventory.clone());
        Ok(())
    }

    async fn find_by_book_id(&self, book_id: BookId) -> Result<Option<Inventory>> {
        let inventories = self.inventories.lock().unwrap();
        Ok(inventories
            .values()
            .find(|inventory| inventory.book_id == book_id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Inventory>> {
        let inventories = self.inventories.lock().unwrap();
        Ok(inventories.values().cloned().collect())
    }

    async fn update(&self, inventory: &Inventory) -> Result<bool> {
        let mut inventories = self.inventories.lock().unwrap();
        if !inventories.contains_key(&inventory.inventory_id) {
            return Ok(false);
        }
        inventories.insert(inventory.inventory_id, inventory.clone());
        Ok(true)
    }
}
