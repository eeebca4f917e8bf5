use crate::domain::{Notification, value_objects::MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知リポジトリポート
///
/// 通知は返却ワークフローの副作用として作成され、会員単位で読み出される。
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// 通知を新規保存する
    async fn create(&self, notification: &Notification) -> Result<()>;

    /// 会員のすべての通知を取得する
    async fn find_by_member_id(&self, member_id: MemberId) -> Result<Vec<Notification>>;
}
