use crate::domain::{Inventory, value_objects::BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 在庫リポジトリポート
///
/// 在庫は書籍と1対1のため、検索キーは書籍IDになる。
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// 在庫行を新規保存する
    async fn create(&self, inventory: &Inventory) -> Result<()>;

    /// 書籍IDで在庫行を取得する
    ///
    /// 貸出・返却ワークフローの加算・減算で使用される。
    async fn find_by_book_id(&self, book_id: BookId) -> Result<Option<Inventory>>;

    /// すべての在庫行を取得する
    async fn find_all(&self) -> Result<Vec<Inventory>>;

    /// 在庫行を上書き更新する
    ///
    /// 対象が存在しない場合はfalseを返す。
    async fn update(&self, inventory: &Inventory) -> Result<bool>;
}
