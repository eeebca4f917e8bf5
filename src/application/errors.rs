use thiserror::Error;

/// 図書館アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LibraryApplicationError {
    /// 書籍が見つからない
    #[error("Book not found")]
    BookNotFound,

    /// 会員が見つからない
    #[error("Member not found")]
    MemberNotFound,

    /// 貸出記録が見つからない
    #[error("Borrow record not found")]
    BorrowNotFound,

    /// 書籍に対応する在庫行が存在しない
    #[error("Inventory not found")]
    InventoryNotFound,

    /// 貸出可能な在庫がない
    #[error("No available copies")]
    NoAvailableCopies,

    /// 既に返却済みの貸出を再返却しようとした
    #[error("Borrow already returned")]
    AlreadyReturned,

    /// ドメイン層の不変条件違反
    #[error("Domain error: {0}")]
    DomainError(String),

    /// リポジトリのエラー
    #[error("Repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryApplicationError>;
