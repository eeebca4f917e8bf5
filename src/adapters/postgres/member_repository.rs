use crate::domain::{Member, MemberCategory, value_objects::MemberId};
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// PostgreSQLの行データをMemberに変換する
///
/// categoryの文字列からの変換でエラーハンドリングを行う。
fn map_row_to_member(row: &PgRow) -> Result<Member> {
    let category_str: &str = row.get("category");
    let category = MemberCategory::from_str(category_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Member {
        member_id: MemberId::from_uuid(row.get("member_id")),
        name: row.get("name"),
        email: row.get("email"),
        password: row.get("password"),
        address: row.get("address"),
        phone: row.get("phone"),
        category,
    })
}

/// MemberRepositoryのPostgreSQL実装
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// PostgreSQLコネクションプールから新しいMemberRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn create(&self, member: &Member) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO members (member_id, name, email, password, address, phone, category)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(member.member_id.value())
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.password)
        .bind(&member.address)
        .bind(&member.phone)
        .bind(member.category.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>> {
        let row = sqlx::query(
            r#"
            SELECT member_id, name, email, password, address, phone, category
            FROM members
            WHERE member_id = $1
            "#,
        )
        .bind(member_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_member).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Member>> {
        let rows = sqlx::query(
            r#"
            SELECT member_id, name, email, password, address, phone, category
            FROM members
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_member).collect()
    }

    async fn update(&self, member: &Member) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE members
            SET name = $2, email = $3, password = $4, address = $5, phone = $6, category = $7
            WHERE member_id = $1
            "#,
        )
        .bind(member.member_id.value())
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.password)
        .bind(&member.address)
        .bind(&member.phone)
        .bind(member.category.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, member_id: MemberId) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM members
            WHERE member_id = $1
            "#,
        )
        .bind(member_id.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
