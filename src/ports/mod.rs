pub mod book_repository;
pub mod borrow_repository;
pub mod fine_repository;
pub mod inventory_repository;
pub mod member_repository;
pub mod notification_repository;

pub use book_repository::BookRepository;
pub use borrow_repository::BorrowRepository;
pub use fine_repository::FineRepository;
pub use inventory_repository::InventoryRepository;
pub use member_repository::MemberRepository;
pub use notification_repository::NotificationRepository;
