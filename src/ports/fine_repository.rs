use crate::domain::{Fine, value_objects::BorrowId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 罰金リポジトリポート
///
/// 罰金は作成後に更新されない（支払いワークフローは存在しない）。
#[async_trait]
pub trait FineRepository: Send + Sync {
    /// 罰金を新規保存する
    async fn create(&self, fine: &Fine) -> Result<()>;

    /// 貸出IDで罰金を取得する
    async fn find_by_borrow_id(&self, borrow_id: BorrowId) -> Result<Option<Fine>>;

    /// すべての罰金を取得する
    async fn find_all(&self) -> Result<Vec<Fine>>;
}
