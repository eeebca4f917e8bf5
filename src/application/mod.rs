mod book_service;
mod borrow_service;
mod errors;
mod fine_service;
mod inventory_service;
mod member_service;
mod notification_service;

pub use book_service::BookService;
pub use borrow_service::{BorrowDetails, BorrowService};
pub use errors::{LibraryApplicationError, Result};
pub use fine_service::FineService;
pub use inventory_service::InventoryService;
pub use member_service::MemberService;
pub use notification_service::NotificationService;
