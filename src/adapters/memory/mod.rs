pub mod book_repository;
pub mod borrow_repository;
pub mod fine_repository;
pub mod inventory_repository;
pub mod member_repository;
pub mod notification_repository;

pub use book_repository::BookRepository as MemoryBookRepository;
pub use borrow_repository::BorrowRepository as MemoryBorrowRepository;
pub use fine_repository::FineRepository as MemoryFineRepository;
pub use inventory_repository::InventoryRepository as MemoryInventoryRepository;
pub use member_repository::MemberRepository as MemoryMemberRepository;
pub use notification_repository::NotificationRepository as MemoryNotificationRepository;
