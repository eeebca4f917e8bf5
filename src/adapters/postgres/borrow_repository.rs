use crate::domain::{Borrow, BorrowStatus, value_objects::{BookId, BorrowId, MemberId}};
use crate::ports::borrow_repository::{BorrowRepository as BorrowRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// Convert a database row into a Borrow record.
///
/// The status column is a free-form VARCHAR in the store; parsing it back
/// into the closed BorrowStatus enum surfaces corrupt rows as errors.
fn map_row_to_borrow(row: &PgRow) -> Result<Borrow> {
    let status_str: &str = row.get("status");
    let status = BorrowStatus::from_str(status_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Borrow {
        borrow_id: BorrowId::from_uuid(row.get("borrow_id")),
        book_id: BookId::from_uuid(row.get("book_id")),
        member_id: MemberId::from_uuid(row.get("member_id")),
        issue_date: row.get("issue_date"),
        due_date: row.get("due_date"),
        return_date: row.get("return_date"),
        status,
    })
}

/// PostgreSQL implementation of BorrowRepository.
pub struct BorrowRepository {
    pool: PgPool,
}

impl BorrowRepository {
    /// Create a new BorrowRepository with a PostgreSQL connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BorrowRepositoryTrait for BorrowRepository {
    async fn create(&self, borrow: &Borrow) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO borrows (
                borrow_id,
                book_id,
                member_id,
                issue_date,
                due_date,
                return_date,
                status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(borrow.borrow_id.value())
        .bind(borrow.book_id.value())
        .bind(borrow.member_id.value())
        .bind(borrow.issue_date)
        .bind(borrow.due_date)
        .bind(borrow.return_date)
        .bind(borrow.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, borrow_id: BorrowId) -> Result<Option<Borrow>> {
        let row = sqlx::query(
            r#"
            SELECT borrow_id, book_id, member_id, issue_date, due_date, return_date, status
            FROM borrows
            WHERE borrow_id = $1
            "#,
        )
        .bind(borrow_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_borrow).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Borrow>> {
        let rows = sqlx::query(
            r#"
            SELECT borrow_id, book_id, member_id, issue_date, due_date, return_date, status
            FROM borrows
            ORDER BY issue_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_borrow).collect()
    }

    async fn update(&self, borrow: &Borrow) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE borrows
            SET
                book_id = $2,
                member_id = $3,
                issue_date = $4,
                due_date = $5,
                return_date = $6,
                status = $7
            WHERE borrow_id = $1
            "#,
        )
        .bind(borrow.borrow_id.value())
        .bind(borrow.book_id.value())
        .bind(borrow.member_id.value())
        .bind(borrow.issue_date)
        .bind(borrow.due_date)
        .bind(borrow.return_date)
        .bind(borrow.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
