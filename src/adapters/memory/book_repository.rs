use crate::domain::{Book, value_objects::BookId};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// BookRepositoryのインメモリ実装
///
/// 統合テストとE2Eテストでデータベースなしのサービスグラフを構築するために使用。
pub struct BookRepository {
    books: Mutex<HashMap<BookId, Book>>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn create(&self, book: &Book) -> Result<()> {
        let mut books = self.books.lock().unwrap();
        books.insert(book.book_id, book.clone());
        Ok(())
    }

    async fn find_by_id(&self, book_id: BookId) -> Result<Option<Book>> {
        let books = self.books.lock().unwrap();
        Ok(books.get(&book_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        let books = self.books.lock().unwrap();
        Ok(books.values().cloned().collect())
    }

    async fn update(&self, book: &Book) -> Result<bool> {
        let mut books = self.books.lock().unwrap();
        if !books.contains_key(&book.book_id) {
            return Ok(false);
        }
        books.insert(book.book_id, book.clone());
        Ok(true)
    }

    async fn delete(&self, book_id: BookId) -> Result<bool> {
        let mut books = self.books.lock().unwrap();
        Ok(books.remove(&book_id).is_some())
    }
}
