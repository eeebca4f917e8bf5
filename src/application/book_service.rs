use crate::domain::{self, Book, value_objects::BookId};
use crate::ports::BookRepository;
use std::sync::Arc;

use super::errors::{LibraryApplicationError, Result};

/// 書籍サービス
///
/// 蔵書カタログのCRUDをリポジトリに委譲する。
/// 依存はコンストラクタ引数で明示的に渡される。
pub struct BookService {
    book_repository: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }

    /// 書籍を登録する
    pub async fn add_book(&self, title: String, author: String) -> Result<Book> {
        let book = domain::book::register_book(title, author);

        self.book_repository
            .create(&book)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        Ok(book)
    }

    /// すべての書籍を取得する
    pub async fn get_all_books(&self) -> Result<Vec<Book>> {
        self.book_repository
            .find_all()
            .await
            .map_err(LibraryApplicationError::RepositoryError)
    }

    /// 書籍を上書き更新する
    pub async fn update_book(&self, book_id: BookId, title: String, author: String) -> Result<Book> {
        let book = Book {
            book_id,
            title,
            author,
        };

        let updated = self
            .book_repository
            .update(&book)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        if !updated {
            return Err(LibraryApplicationError::BookNotFound);
        }

        Ok(book)
    }

    /// 書籍を削除する
    pub async fn delete_book(&self, book_id: BookId) -> Result<()> {
        let deleted = self
            .book_repository
            .delete(book_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        if !deleted {
            return Err(LibraryApplicationError::BookNotFound);
        }

        Ok(())
    }
}
