use crate::domain::{Fine, value_objects::{BorrowId, FineId}};
use crate::ports::fine_repository::{FineRepository as FineRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// FineRepositoryのインメモリ実装
pub struct FineRepository {
    fines: Mutex<HashMap<FineId, Fine>>,
}

impl FineRepository {
    pub fn new() -> Self {
        Self {
            fines: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for FineRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FineRepositoryTrait for FineRepository {
    async fn create(&self, fine: &Fine) -> Result<()> {
        let mut fines = self.fines.lock().unwrap();
        fines.insert(fine.fine_id, fine.clone());
        Ok(())
    }

    async fn find_by_borrow_id(&self, borrow_id: BorrowId) -> Result<Option<Fine>> {
        let fines = self.fines.lock().unwrap();
        Ok(fines
            .values()
            .find(|fine| fine.borrow_id == borrow_id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Fine>> {
        let fines = self.fines.lock().unwrap();
        Ok(fines.values().cloned().collect())
    }
}
