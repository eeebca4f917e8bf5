use crate::domain::{Notification, value_objects::{MemberId, NotificationId}};
use crate::ports::notification_repository::{
    NotificationRepository as NotificationRepositoryTrait, Result,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// NotificationRepositoryのインメモリ実装
pub struct NotificationRepository {
    notifications: Mutex<HashMap<NotificationId, Notification>>,
}

impl NotificationRepository {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NotificationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationRepositoryTrait for NotificationRepository {
    async fn create(&self, notification: &Notification) -> Result<()> {
        let mut notifications = self.notifications.lock().unwrap();
        notifications.insert(notification.notification_id, notification.clone());
        Ok(())
    }

    async fn find_by_member_id(&self, member_id: MemberId) -> Result<Vec<Notification>> {
        let notifications = self.notifications.lock().unwrap();
        Ok(notifications
            .values()
            .filter(|notification| notification.member_id == member_id)
            .cloned()
            .collect())
    }
}
