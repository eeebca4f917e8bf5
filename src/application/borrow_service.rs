use crate::domain::{self, Book, Borrow, Member, commands::*, value_objects::BorrowId};
use crate::ports::{BookRepository, BorrowRepository, MemberRepository};
use std::sync::Arc;

use super::errors::{LibraryApplicationError, Result};
use super::fine_service::FineService;
use super::inventory_service::InventoryService;
use super::notification_service::NotificationService;

/// 貸出と関連レコードの結合ビュー
///
/// HTTPレスポンスはネストした関連レコードを含むため、
/// 外部キーから明示的なルックアップで組み立てる。
#[derive(Debug, Clone)]
pub struct BorrowDetails {
    pub borrow: Borrow,
    pub book: Book,
    pub member: Member,
}

/// 貸出サービス
///
/// 貸出・返却ワークフローのオーケストレーションを担当する。
/// 協調するサービスとリポジトリはすべてコンストラクタ引数で受け取る。
pub struct BorrowService {
    borrow_repository: Arc<dyn BorrowRepository>,
    book_repository: Arc<dyn BookRepository>,
    member_repository: Arc<dyn MemberRepository>,
    inventory_service: Arc<InventoryService>,
    fine_service: Arc<FineService>,
    notification_service: Arc<NotificationService>,
}

impl BorrowService {
    pub fn new(
        borrow_repository: Arc<dyn BorrowRepository>,
        book_repository: Arc<dyn BookRepository>,
        member_repository: Arc<dyn MemberRepository>,
        inventory_service: Arc<InventoryService>,
        fine_service: Arc<FineService>,
        notification_service: Arc<NotificationService>,
    ) -> Self {
        Self {
            borrow_repository,
            book_repository,
            member_repository,
            inventory_service,
            fine_service,
            notification_service,
        }
    }

    /// 書籍を貸し出す
    ///
    /// ビジネスルール：
    /// - 会員が存在すること
    /// - 書籍が存在すること
    /// - 在庫行が存在し、貸出可能な冊数が1以上あること
    ///
    /// 在庫の減算と貸出レコードの作成は別々の書き込みで、
    /// 途中で失敗した場合のロールバックは行わない。
    pub async fn borrow_book(&self, cmd: BorrowBook) -> Result<BorrowDetails> {
        // 1. 会員の存在確認
        let member = self
            .member_repository
            .find_by_id(cmd.member_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?
            .ok_or(LibraryApplicationError::MemberNotFound)?;

        // 2. 書籍の存在確認
        let book = self
            .book_repository
            .find_by_id(cmd.book_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?
            .ok_or(LibraryApplicationError::BookNotFound)?;

        // 3. 在庫から1冊取り出す
        self.inventory_service
            .reduce_available_copies(cmd.book_id)
            .await?;

        // 4. 貸出レコードを作成して永続化
        let borrow =
            domain::borrow::issue_borrow(cmd.book_id, cmd.member_id, cmd.issue_date, cmd.due_date);

        self.borrow_repository
            .create(&borrow)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        Ok(BorrowDetails {
            borrow,
            book,
            member,
        })
    }

    /// 書籍を返却する
    ///
    /// 処理は逐次で、4つの集約（Borrow, Inventory, Fine, Notification）に
    /// またがるがトランザクションで束ねない。途中で失敗した場合、
    /// それ以前のステップの書き込みは残る（at-least-once露出）。
    ///
    /// ビジネスルール：
    /// - 貸出が存在すること
    /// - 既に返却済みでないこと
    /// - 在庫に1冊戻す
    /// - 延滞があれば罰金を査定する
    /// - 罰金の有無で内容が分岐する通知を記録する
    pub async fn return_book(&self, cmd: ReturnBook) -> Result<BorrowDetails> {
        // 1. 貸出レコードを取得
        let borrow = self
            .borrow_repository
            .find_by_id(cmd.borrow_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?
            .ok_or(LibraryApplicationError::BorrowNotFound)?;

        // 2. ドメイン層の純粋関数で返却状態へ遷移
        let returned = domain::borrow::return_borrow(&borrow, cmd.return_date).map_err(|e| match e {
            domain::ReturnBorrowError::AlreadyReturned => LibraryApplicationError::AlreadyReturned,
        })?;

        // 3. 在庫に1冊戻す（在庫行がなければここで失敗し、以降は実行されない）
        self.inventory_service
            .increase_available_copies(returned.book_id)
            .await?;

        // 4. 罰金を査定
        let fine = self.fine_service.calculate_fine(&returned).await?;

        // 5. 罰金の有無で分岐する通知を記録
        let message = match &fine {
            Some(fine) => format!("Book returned late. Fine: {}", fine.amount),
            None => "Book returned successfully. No fine.".to_string(),
        };

        self.notification_service
            .send_notification(returned.member_id, message)
            .await?;

        // 6. 更新された貸出レコードを永続化
        self.borrow_repository
            .update(&returned)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        self.assemble_details(returned).await
    }

    /// すべての貸出を関連レコード付きで取得する
    pub async fn get_all_borrows(&self) -> Result<Vec<BorrowDetails>> {
        let borrows = self
            .borrow_repository
            .find_all()
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        let mut details = Vec::with_capacity(borrows.len());
        for borrow in borrows {
            details.push(self.assemble_details(borrow).await?);
        }

        Ok(details)
    }

    /// IDで貸出を関連レコード付きで取得する
    pub async fn get_borrow_by_id(&self, borrow_id: BorrowId) -> Result<BorrowDetails> {
        let borrow = self
            .borrow_repository
            .find_by_id(borrow_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?
            .ok_or(LibraryApplicationError::BorrowNotFound)?;

        self.assemble_details(borrow).await
    }

    /// 外部キーから書籍・会員をルックアップして結合ビューを組み立てる
    async fn assemble_details(&self, borrow: Borrow) -> Result<BorrowDetails> {
        let book = self
            .book_repository
            .find_by_id(borrow.book_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?
            .ok_or(LibraryApplicationError::BookNotFound)?;

        let member = self
            .member_repository
            .find_by_id(borrow.member_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?
            .ok_or(LibraryApplicationError::MemberNotFound)?;

        Ok(BorrowDetails {
            borrow,
            book,
            member,
        })
    }
}
