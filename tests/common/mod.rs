#![allow(dead_code)]

use rusty_library_management::adapters::memory::{
    MemoryBookRepository, MemoryBorrowRepository, MemoryFineRepository,
    MemoryInventoryRepository, MemoryMemberRepository, MemoryNotificationRepository,
};
use rusty_library_management::application::{
    BookService, BorrowService, FineService, InventoryService, MemberService, NotificationService,
};
use rusty_library_management::domain::{Book, Member, MemberCategory, value_objects::BookId};
use rusty_library_management::ports::{
    BookRepository, BorrowRepository, FineRepository, InventoryRepository, MemberRepository,
    NotificationRepository,
};
use std::sync::Arc;

/// テスト用に組み立てたサービスグラフ
///
/// 本番と同じ配線をインメモリリポジトリの上に構築する。
/// リポジトリは永続化された状態を直接検証するために公開している。
pub struct TestServices {
    pub book_service: Arc<BookService>,
    pub member_service: Arc<MemberService>,
    pub inventory_service: Arc<InventoryService>,
    pub borrow_service: Arc<BorrowService>,
    pub fine_service: Arc<FineService>,
    pub notification_service: Arc<NotificationService>,
    pub borrow_repository: Arc<dyn BorrowRepository>,
    pub inventory_repository: Arc<dyn InventoryRepository>,
    pub fine_repository: Arc<dyn FineRepository>,
    pub notification_repository: Arc<dyn NotificationRepository>,
}

/// インメモリリポジトリでサービスグラフを構築する
///
/// main.rsと同じ明示的な配線を使用することで、
/// テストと本番の一貫性を保証する。
pub fn setup_services() -> TestServices {
    let book_repository: Arc<dyn BookRepository> = Arc::new(MemoryBookRepository::new());
    let member_repository: Arc<dyn MemberRepository> = Arc::new(MemoryMemberRepository::new());
    let inventory_repository: Arc<dyn InventoryRepository> =
        Arc::new(MemoryInventoryRepository::new());
    let borrow_repository: Arc<dyn BorrowRepository> = Arc::new(MemoryBorrowRepository::new());
    let fine_repository: Arc<dyn FineRepository> = Arc::new(MemoryFineRepository::new());
    let notification_repository: Arc<dyn NotificationRepository> =
        Arc::new(MemoryNotificationRepository::new());

    let inventory_service = Arc::new(InventoryService::new(
        inventory_repository.clone(),
        book_repository.clone(),
    ));
    let fine_service = Arc::new(FineService::new(fine_repository.clone()));
    let notification_service = Arc::new(NotificationService::new(notification_repository.clone()));
    let borrow_service = Arc::new(BorrowService::new(
        borrow_repository.clone(),
        book_repository.clone(),
        member_repository.clone(),
        inventory_service.clone(),
        fine_service.clone(),
        notification_service.clone(),
    ));
    let book_service = Arc::new(BookService::new(book_repository));
    let member_service = Arc::new(MemberService::new(member_repository));

    TestServices {
        book_service,
        member_service,
        inventory_service,
        borrow_service,
        fine_service,
        notification_service,
        borrow_repository,
        inventory_repository,
        fine_repository,
        notification_repository,
    }
}

/// テスト用の書籍を登録する
pub async fn seed_book(services: &TestServices) -> Book {
    services
        .book_service
        .add_book("The Left Hand of Darkness".to_string(), "Ursula K. Le Guin".to_string())
        .await
        .expect("Failed to seed book")
}

/// テスト用の会員を登録する
pub async fn seed_member(services: &TestServices) -> Member {
    services
        .member_service
        .add_member(
            "Hanako Yamada".to_string(),
            "hanako@example.com".to_string(),
            "secret".to_string(),
            "1-2-3 Chiyoda, Tokyo".to_string(),
            "03-0000-0000".to_string(),
            MemberCategory::Student,
        )
        .await
        .expect("Failed to seed member")
}

/// 書籍の現在の貸出可能冊数を取得する
pub async fn available_copies(services: &TestServices, book_id: BookId) -> i32 {
    services
        .inventory_repository
        .find_by_book_id(book_id)
        .await
        .expect("Failed to load inventory")
        .expect("Inventory row missing")
        .available_copies
}
