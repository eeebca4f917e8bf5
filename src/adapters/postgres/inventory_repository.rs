use crate::domain::{Inventory, value_objects::{BookId, InventoryId}};
use crate::ports::inventory_repository::{InventoryRepository as InventoryRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

fn map_row_to_inventory(row: &PgRow) -> Inventory {
    Inventory {
        inventory_id: InventoryId::from_uuid(row.get("inventory_id")),
        book_id: BookId::from_uuid(row.get("book_id")),
        total_copies: row.get("total_copies"),
        available_copies: row.get("available_copies"),
        lost_copies: row.get("lost_copies"),
        damaged_copies: row.get("damaged_copies"),
        last_updated: row.get("last_updated"),
    }
}

/// InventoryRepositoryのPostgreSQL実装
///
/// 在庫は書籍と1対1で、book_idにUNIQUE制約がある。
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    /// PostgreSQLコネクションプールから新しいInventoryRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepositoryTrait for InventoryRepository {
    async fn create(&self, inventory: &Inventory) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO inventories (
                inventory_id,
                book_id,
                total_copies,
                available_copies,
                lost_copies,
                damaged_copies,
                last_updated
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(inventory.inventory_id.value())
        .bind(inventory.book_id.value())
        .bind(inventory.total_copies)
        .bind(inventory.available_copies)
        .bind(inventory.lost_copies)
        .bind(inventory.damaged_copies)
        .bind(inventory.last_updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_book_id(&self, book_id: BookId) -> Result<Option<Inventory>> {
        let row = sqlx::query(
            r#"
            SELECT
                inventory_id,
                book_id,
                total_copies,
                available_copies,
                lost_copies,
                damaged_copies,
                last_updated
            FROM inventories
            WHERE book_id = $1
            "#,
        )
        .bind(book_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_inventory))
    }

    async fn find_all(&self) -> Result<Vec<Inventory>> {
        let rows = sqlx::query(
            r#"
            SELECT
                inventory_id,
                book_id,
                total_copies,
                available_copies,
                lost_copies,
                damaged_copies,
                last_updated
            FROM inventories
            ORDER BY last_updated DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_inventory).collect())
    }

    async fn update(&self, inventory: &Inventory) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE inventories
            SET
                total_copies = $2,
                available_copies = $3,
                lost_copies = $4,
                damaged_copies = $5,
                last_updated = $6
            WHERE inventory_id = $1
            "#,
        )
        .bind(inventory.inventory_id.value())
        .bind(inventory.total_copies)
        .bind(inventory.available_copies)
        .bind(inventory.lost_copies)
        .bind(inventory.damaged_copies)
        .bind(inventory.last_updated)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
