use serde::{Deserialize, Serialize};

use super::BookId;

/// 書籍レコード - タイトルと著者のみを持つプレーンなデータ
///
/// 在庫数は別集約（Inventory）が管理する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
}

/// 純粋関数：書籍を登録する
pub fn register_book(title: String, author: String) -> Book {
    Book {
        book_id: BookId::new(),
        title,
        author,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_book_assigns_fresh_id() {
        let book1 = register_book("Dune".to_string(), "Frank Herbert".to_string());
        let book2 = register_book("Dune".to_string(), "Frank Herbert".to_string());

        assert_ne!(book1.book_id, book2.book_id);
        assert_eq!(book1.title, "Dune");
        assert_eq!(book1.author, "Frank Herbert");
    }
}
