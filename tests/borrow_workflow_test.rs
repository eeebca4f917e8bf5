use chrono::{Duration, Utc};
use rusty_library_management::application::LibraryApplicationError;
use rusty_library_management::domain::{
    self, BorrowStatus, FineStatus,
    commands::{BorrowBook, ReturnBook},
};

mod common;

use common::{available_copies, seed_book, seed_member, setup_services};

// ============================================================================
// 貸出ワークフロー
// ============================================================================

#[tokio::test]
async fn test_borrow_book_decrements_available_copies() {
    let services = setup_services();
    let book = seed_book(&services).await;
    let member = seed_member(&services).await;

    services
        .inventory_service
        .create_inventory(book.book_id, 3)
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    let details = services
        .borrow_service
        .borrow_book(BorrowBook {
            book_id: book.book_id,
            member_id: member.member_id,
            issue_date: today,
            due_date: today + Duration::days(14),
        })
        .await
        .unwrap();

    assert_eq!(details.borrow.status, BorrowStatus::Borrowed);
    assert_eq!(details.borrow.return_date, None);
    assert_eq!(details.book.book_id, book.book_id);
    assert_eq!(details.member.member_id, member.member_id);
    assert_eq!(available_copies(&services, book.book_id).await, 2);
}

#[tokio::test]
async fn test_borrow_book_fails_when_member_missing() {
    let services = setup_services();
    let book = seed_book(&services).await;

    services
        .inventory_service
        .create_inventory(book.book_id, 1)
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    let result = services
        .borrow_service
        .borrow_book(BorrowBook {
            book_id: book.book_id,
            member_id: domain::value_objects::MemberId::new(),
            issue_date: today,
            due_date: today + Duration::days(14),
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        LibraryApplicationError::MemberNotFound
    ));
    // 会員確認で失敗するため在庫は減らない
    assert_eq!(available_copies(&services, book.book_id).await, 1);
}

#[tokio::test]
async fn test_borrow_book_fails_when_inventory_missing() {
    let services = setup_services();
    let book = seed_book(&services).await;
    let member = seed_member(&services).await;

    let today = Utc::now().date_naive();
    let result = services
        .borrow_service
        .borrow_book(BorrowBook {
            book_id: book.book_id,
            member_id: member.member_id,
            issue_date: today,
            due_date: today + Duration::days(14),
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        LibraryApplicationError::InventoryNotFound
    ));

    let borrows = services.borrow_repository.find_all().await.unwrap();
    assert!(borrows.is_empty());
}

#[tokio::test]
async fn test_borrow_book_fails_when_no_copies_available() {
    let services = setup_services();
    let book = seed_book(&services).await;
    let member = seed_member(&services).await;

    services
        .inventory_service
        .create_inventory(book.book_id, 1)
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    let cmd = BorrowBook {
        book_id: book.book_id,
        member_id: member.member_id,
        issue_date: today,
        due_date: today + Duration::days(14),
    };

    services.borrow_service.borrow_book(cmd.clone()).await.unwrap();

    let result = services.borrow_service.borrow_book(cmd).await;

    assert!(matches!(
        result.unwrap_err(),
        LibraryApplicationError::NoAvailableCopies
    ));

    // 2件目の貸出レコードは作成されない
    let borrows = services.borrow_repository.find_all().await.unwrap();
    assert_eq!(borrows.len(), 1);
}

// ============================================================================
// 返却ワークフロー
// ============================================================================

#[tokio::test]
async fn test_return_book_restocks_exactly_one_copy() {
    let services = setup_services();
    let book = seed_book(&services).await;
    let member = seed_member(&services).await;

    services
        .inventory_service
        .create_inventory(book.book_id, 3)
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    let details = services
        .borrow_service
        .borrow_book(BorrowBook {
            book_id: book.book_id,
            member_id: member.member_id,
            issue_date: today,
            due_date: today + Duration::days(14),
        })
        .await
        .unwrap();

    let before = available_copies(&services, book.book_id).await;

    let returned = services
        .borrow_service
        .return_book(ReturnBook {
            borrow_id: details.borrow.borrow_id,
            return_date: today,
        })
        .await
        .unwrap();

    assert_eq!(returned.borrow.status, BorrowStatus::Returned);
    assert_eq!(returned.borrow.return_date, Some(today));
    assert_eq!(available_copies(&services, book.book_id).await, before + 1);

    // 永続化された貸出レコードも返却済みになっている
    let persisted = services
        .borrow_repository
        .find_by_id(details.borrow.borrow_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(persisted.status, BorrowStatus::Returned);
}

/// 0日目に貸出、10日目が期限、15日目に返却 → 罰金50、通知に金額を含む
#[tokio::test]
async fn test_late_return_creates_fine_and_late_notification() {
    let services = setup_services();
    let book = seed_book(&services).await;
    let member = seed_member(&services).await;

    services
        .inventory_service
        .create_inventory(book.book_id, 1)
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    let details = services
        .borrow_service
        .borrow_book(BorrowBook {
            book_id: book.book_id,
            member_id: member.member_id,
            issue_date: today - Duration::days(15),
            due_date: today - Duration::days(5),
        })
        .await
        .unwrap();

    services
        .borrow_service
        .return_book(ReturnBook {
            borrow_id: details.borrow.borrow_id,
            return_date: today,
        })
        .await
        .unwrap();

    let fines = services.fine_service.get_all_fines().await.unwrap();
    assert_eq!(fines.len(), 1);

    let fine = services
        .fine_repository
        .find_by_borrow_id(details.borrow.borrow_id)
        .await
        .unwrap()
        .expect("Fine row missing");
    assert_eq!(fine.amount, 50);
    assert_eq!(fine.status, FineStatus::Unpaid);

    let notifications = services
        .notification_service
        .get_notifications_for_member(member.member_id)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].message, "Book returned late. Fine: 50");
}

/// 期限当日の返却 → 罰金なし、通知は罰金なしを示す
#[tokio::test]
async fn test_on_time_return_creates_no_fine() {
    let services = setup_services();
    let book = seed_book(&services).await;
    let member = seed_member(&services).await;

    services
        .inventory_service
        .create_inventory(book.book_id, 1)
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    let details = services
        .borrow_service
        .borrow_book(BorrowBook {
            book_id: book.book_id,
            member_id: member.member_id,
            issue_date: today - Duration::days(10),
            due_date: today,
        })
        .await
        .unwrap();

    services
        .borrow_service
        .return_book(ReturnBook {
            borrow_id: details.borrow.borrow_id,
            return_date: today,
        })
        .await
        .unwrap();

    let fines = services.fine_service.get_all_fines().await.unwrap();
    assert!(fines.is_empty());

    let notifications = services
        .notification_service
        .get_notifications_for_member(member.member_id)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0].message,
        "Book returned successfully. No fine."
    );
}

#[tokio::test]
async fn test_return_book_fails_when_already_returned() {
    let services = setup_services();
    let book = seed_book(&services).await;
    let member = seed_member(&services).await;

    services
        .inventory_service
        .create_inventory(book.book_id, 2)
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    let details = services
        .borrow_service
        .borrow_book(BorrowBook {
            book_id: book.book_id,
            member_id: member.member_id,
            issue_date: today,
            due_date: today + Duration::days(14),
        })
        .await
        .unwrap();

    let cmd = ReturnBook {
        borrow_id: details.borrow.borrow_id,
        return_date: today,
    };

    services.borrow_service.return_book(cmd.clone()).await.unwrap();

    let result = services.borrow_service.return_book(cmd).await;

    assert!(matches!(
        result.unwrap_err(),
        LibraryApplicationError::AlreadyReturned
    ));

    // 再返却は在庫にも通知にも影響しない
    assert_eq!(available_copies(&services, book.book_id).await, 2);
    let notifications = services
        .notification_service
        .get_notifications_for_member(member.member_id)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 1);
}

/// 在庫行のない書籍の返却は失敗し、その呼び出しでは何も永続化されない
#[tokio::test]
async fn test_return_book_fails_when_inventory_missing() {
    let services = setup_services();
    let book = seed_book(&services).await;
    let member = seed_member(&services).await;

    // 在庫行を作らずに貸出レコードだけを直接永続化する
    let today = Utc::now().date_naive();
    let borrow = domain::borrow::issue_borrow(
        book.book_id,
        member.member_id,
        today - Duration::days(15),
        today - Duration::days(5),
    );
    services.borrow_repository.create(&borrow).await.unwrap();

    let result = services
        .borrow_service
        .return_book(ReturnBook {
            borrow_id: borrow.borrow_id,
            return_date: today,
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        LibraryApplicationError::InventoryNotFound
    ));

    // 罰金も通知も作成されず、貸出レコードも貸出中のまま
    assert!(services.fine_service.get_all_fines().await.unwrap().is_empty());
    assert!(
        services
            .notification_service
            .get_notifications_for_member(member.member_id)
            .await
            .unwrap()
            .is_empty()
    );

    let persisted = services
        .borrow_repository
        .find_by_id(borrow.borrow_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(persisted.status, BorrowStatus::Borrowed);
    assert_eq!(persisted.return_date, None);
}

#[tokio::test]
async fn test_return_book_fails_when_borrow_missing() {
    let services = setup_services();

    let result = services
        .borrow_service
        .return_book(ReturnBook {
            borrow_id: domain::value_objects::BorrowId::new(),
            return_date: Utc::now().date_naive(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        LibraryApplicationError::BorrowNotFound
    ));
}
