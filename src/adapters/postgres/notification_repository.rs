use crate::domain::{Notification, value_objects::{MemberId, NotificationId}};
use crate::ports::notification_repository::{
    NotificationRepository as NotificationRepositoryTrait, Result,
};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

fn map_row_to_notification(row: &PgRow) -> Notification {
    Notification {
        notification_id: NotificationId::from_uuid(row.get("notification_id")),
        member_id: MemberId::from_uuid(row.get("member_id")),
        message: row.get("message"),
        sent_date: row.get("sent_date"),
    }
}

/// NotificationRepositoryのPostgreSQL実装
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// PostgreSQLコネクションプールから新しいNotificationRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepositoryTrait for NotificationRepository {
    async fn create(&self, notification: &Notification) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications (notification_id, member_id, message, sent_date)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(notification.notification_id.value())
        .bind(notification.member_id.value())
        .bind(&notification.message)
        .bind(notification.sent_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_member_id(&self, member_id: MemberId) -> Result<Vec<Notification>> {
        let rows = sqlx::query(
            r#"
            SELECT notification_id, member_id, message, sent_date
            FROM notifications
            WHERE member_id = $1
            ORDER BY sent_date DESC
            "#,
        )
        .bind(member_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_notification).collect())
    }
}
