use crate::domain::{Fine, FineStatus, value_objects::{BorrowId, FineId}};
use crate::ports::fine_repository::{FineRepository as FineRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

fn map_row_to_fine(row: &PgRow) -> Result<Fine> {
    let status_str: &str = row.get("status");
    let status = FineStatus::from_str(status_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Fine {
        fine_id: FineId::from_uuid(row.get("fine_id")),
        borrow_id: BorrowId::from_uuid(row.get("borrow_id")),
        amount: row.get("amount"),
        fine_date: row.get("fine_date"),
        status,
    })
}

/// FineRepositoryのPostgreSQL実装
pub struct FineRepository {
    pool: PgPool,
}

impl FineRepository {
    /// PostgreSQLコネクションプールから新しいFineRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FineRepositoryTrait for FineRepository {
    async fn create(&self, fine: &Fine) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO fines (fine_id, borrow_id, amount, fine_date, status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(fine.fine_id.value())
        .bind(fine.borrow_id.value())
        .bind(fine.amount)
        .bind(fine.fine_date)
        .bind(fine.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_borrow_id(&self, borrow_id: BorrowId) -> Result<Option<Fine>> {
        let row = sqlx::query(
            r#"
            SELECT fine_id, borrow_id, amount, fine_date, status
            FROM fines
            WHERE borrow_id = $1
            "#,
        )
        .bind(borrow_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_fine).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Fine>> {
        let rows = sqlx::query(
            r#"
            SELECT fine_id, borrow_id, amount, fine_date, status
            FROM fines
            ORDER BY fine_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_fine).collect()
    }
}
