use crate::domain::{Book, value_objects::BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍リポジトリポート
///
/// 書籍レコードの明示的なデータアクセス関数を抽象化する。
/// ORMの自動マッピングは使わず、実装がSQLを明示的に発行する。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 書籍を新規保存する
    async fn create(&self, book: &Book) -> Result<()>;

    /// IDで書籍を取得する
    async fn find_by_id(&self, book_id: BookId) -> Result<Option<Book>>;

    /// すべての書籍を取得する
    async fn find_all(&self) -> Result<Vec<Book>>;

    /// 書籍を上書き更新する
    ///
    /// 対象が存在しない場合はfalseを返す。
    async fn update(&self, book: &Book) -> Result<bool>;

    /// 書籍を削除する
    ///
    /// 対象が存在しない場合はfalseを返す。
    async fn delete(&self, book_id: BookId) -> Result<bool>;
}
