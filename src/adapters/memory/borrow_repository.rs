use crate::domain::{Borrow, value_objects::BorrowId};
use crate::ports::borrow_repository::{BorrowRepository as BorrowRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// BorrowRepositoryのインメモリ実装
pub struct BorrowRepository {
    borrows: Mutex<HashMap<BorrowId, Borrow>>,
}

impl BorrowRepository {
    pub fn new() -> Self {
        Self {
            borrows: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for BorrowRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BorrowRepositoryTrait for BorrowRepository {
    async fn create(&self, borrow: &Borrow) -> Result<()> {
        let mut borrows = self.borrows.lock().unwrap();
        borrows.insert(borrow.borrow_id, borrow.clone());
        Ok(())
    }

    async fn find_by_id(&self, borrow_id: BorrowId) -> Result<Option<Borrow>> {
        let borrows = self.borrows.lock().unwrap();
        Ok(borrows.get(&borrow_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Borrow>> {
        let borrows = self.borrows.lock().unwrap();
        Ok(borrows.values().cloned().collect())
    }

    async fn update(&self, borrow: &Borrow) -> Result<bool> {
        let mut borrows = self.borrows.lock().unwrap();
        if !borrows.contains_key(&borrow.borrow_id) {
            return Ok(false);
        }
        borrows.insert(borrow.borrow_id, borrow.clone());
        Ok(true)
    }
}
