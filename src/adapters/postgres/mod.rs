pub mod book_repository;
pub mod borrow_repository;
pub mod fine_repository;
pub mod inventory_repository;
pub mod member_repository;
pub mod notification_repository;

// パブリックに型を再エクスポート
pub use book_repository::BookRepository as PostgresBookRepository;
pub use borrow_repository::BorrowRepository as PostgresBorrowRepository;
pub use fine_repository::FineRepository as PostgresFineRepository;
pub use inventory_repository::InventoryRepository as PostgresInventoryRepository;
pub use member_repository::MemberRepository as PostgresMemberRepository;
pub use notification_repository::NotificationRepository as PostgresNotificationRepository;
