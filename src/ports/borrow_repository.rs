use crate::domain::{Borrow, value_objects::BorrowId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出リポジトリポート
///
/// 貸出レコードは作成と返却時の1回の更新のみを持つ。削除は提供しない。
#[async_trait]
pub trait BorrowRepository: Send + Sync {
    /// 貸出を新規保存する
    async fn create(&self, borrow: &Borrow) -> Result<()>;

    /// IDで貸出を取得する
    async fn find_by_id(&self, borrow_id: BorrowId) -> Result<Option<Borrow>>;

    /// すべての貸出を取得する
    async fn find_all(&self) -> Result<Vec<Borrow>>;

    /// 貸出を上書き更新する
    ///
    /// 返却ワークフローの最終ステップで使用される。
    /// 対象が存在しない場合はfalseを返す。
    async fn update(&self, borrow: &Borrow) -> Result<bool>;
}
