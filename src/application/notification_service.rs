use crate::domain::{self, Notification, value_objects::MemberId};
use crate::ports::NotificationRepository;
use chrono::Utc;
use std::sync::Arc;

use super::errors::{LibraryApplicationError, Result};

/// 通知サービス
///
/// 会員に紐づくメッセージ行を永続化する。配信は行わない。
pub struct NotificationService {
    notification_repository: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(notification_repository: Arc<dyn NotificationRepository>) -> Self {
        Self {
            notification_repository,
        }
    }

    /// 通知を記録する
    pub async fn send_notification(
        &self,
        member_id: MemberId,
        message: String,
    ) -> Result<Notification> {
        let notification =
            domain::notification::record_notification(member_id, message, Utc::now().date_naive());

        self.notification_repository
            .create(&notification)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        Ok(notification)
    }

    /// 会員のすべての通知を取得する
    pub async fn get_notifications_for_member(
        &self,
        member_id: MemberId,
    ) -> Result<Vec<Notification>> {
        self.notification_repository
            .find_by_member_id(member_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)
    }
}
