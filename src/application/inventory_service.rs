use crate::domain::{self, Inventory, InventoryError, value_objects::BookId};
use crate::ports::{BookRepository, InventoryRepository};
use chrono::Utc;
use std::sync::Arc;

use super::errors::{LibraryApplicationError, Result};

/// 在庫サービス
///
/// 書籍ごとの冊数管理を担当する。加算・減算は常にちょうど1冊で、
/// 不変条件（0 <= available <= total）はドメイン層の純粋関数が守る。
pub struct InventoryService {
    inventory_repository: Arc<dyn InventoryRepository>,
    book_repository: Arc<dyn BookRepository>,
}

impl InventoryService {
    pub fn new(
        inventory_repository: Arc<dyn InventoryRepository>,
        book_repository: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            inventory_repository,
            book_repository,
        }
    }

    /// 書籍の在庫行を作成する
    ///
    /// ビジネスルール：
    /// - 書籍が存在すること
    /// - 在庫行は書籍ごとに1行まで
    pub async fn create_inventory(&self, book_id: BookId, total_copies: i32) -> Result<Inventory> {
        let book = self
            .book_repository
            .find_by_id(book_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        if book.is_none() {
            return Err(LibraryApplicationError::BookNotFound);
        }

        let existing = self
            .inventory_repository
            .find_by_book_id(book_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        if existing.is_some() {
            return Err(LibraryApplicationError::DomainError(
                "Inventory already exists for book".to_string(),
            ));
        }

        let inventory =
            domain::inventory::create_inventory(book_id, total_copies, Utc::now().date_naive());

        self.inventory_repository
            .create(&inventory)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        Ok(inventory)
    }

    /// すべての在庫行を取得する
    pub async fn get_all_inventories(&self) -> Result<Vec<Inventory>> {
        self.inventory_repository
            .find_all()
            .await
            .map_err(LibraryApplicationError::RepositoryError)
    }

    /// 書籍の在庫を1冊増やす（返却時の再入庫）
    ///
    /// 在庫行が存在しない場合はInventoryNotFoundで失敗し、何も永続化しない。
    pub async fn increase_available_copies(&self, book_id: BookId) -> Result<Inventory> {
        let inventory = self
            .inventory_repository
            .find_by_book_id(book_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?
            .ok_or(LibraryApplicationError::InventoryNotFound)?;

        let updated = domain::inventory::restock_copy(&inventory, Utc::now().date_naive())
            .map_err(|e| LibraryApplicationError::DomainError(format!("{:?}", e)))?;

        self.inventory_repository
            .update(&updated)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        Ok(updated)
    }

    /// 書籍の在庫を1冊減らす（貸出時の取り出し）
    ///
    /// 在庫行が存在しない場合はInventoryNotFound、
    /// 貸出可能な在庫がない場合はNoAvailableCopiesで失敗する。
    pub async fn reduce_available_copies(&self, book_id: BookId) -> Result<Inventory> {
        let inventory = self
            .inventory_repository
            .find_by_book_id(book_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?
            .ok_or(LibraryApplicationError::InventoryNotFound)?;

        let updated = domain::inventory::checkout_copy(&inventory, Utc::now().date_naive())
            .map_err(|e| match e {
                InventoryError::NoAvailableCopies => LibraryApplicationError::NoAvailableCopies,
                other => LibraryApplicationError::DomainError(format!("{:?}", other)),
            })?;

        self.inventory_repository
            .update(&updated)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        Ok(updated)
    }
}
