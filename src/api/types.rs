use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::BorrowDetails;
use crate::domain::{
    Book, BORROW_PERIOD_DAYS, Fine, Inventory, Member, MemberCategory, Notification,
    commands::BorrowBook,
    value_objects::{BookId, MemberId},
};

// ============================================================================
// Requests
// ============================================================================

/// 書籍の作成・更新リクエスト（POST /api/books, PUT /api/books/:id）
#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub title: String,
    pub author: String,
}

/// 会員の作成・更新リクエスト（POST /api/members, PUT /api/members/:id）
#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone: String,
    pub category: MemberCategory,
}

/// 在庫行の作成リクエスト（POST /api/inventory）
#[derive(Debug, Deserialize)]
pub struct CreateInventoryRequest {
    pub book_id: Uuid,
    pub total_copies: i32,
}

/// 貸出リクエスト（POST /api/borrow）
///
/// 日付が省略された場合、発行日は当日、返却期限は当日+貸出期間となる。
#[derive(Debug, Deserialize)]
pub struct BorrowBookRequest {
    pub book_id: Uuid,
    pub member_id: Uuid,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

impl BorrowBookRequest {
    /// リクエストをドメインコマンドに変換する
    pub fn to_command(&self) -> BorrowBook {
        let issue_date = self.issue_date.unwrap_or_else(|| Utc::now().date_naive());
        let due_date = self
            .due_date
            .unwrap_or_else(|| issue_date + Duration::days(BORROW_PERIOD_DAYS));

        BorrowBook {
            book_id: BookId::from_uuid(self.book_id),
            member_id: MemberId::from_uuid(self.member_id),
            issue_date,
            due_date,
        }
    }
}

/// 通知一覧取得のクエリパラメータ（GET /api/notifications）
#[derive(Debug, Deserialize)]
pub struct ListNotificationsQuery {
    /// 会員IDでフィルタリング（必須）
    pub member_id: Option<Uuid>,
}

// ============================================================================
// Responses
// ============================================================================

/// 書籍レスポンス
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub book_id: Uuid,
    pub title: String,
    pub author: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            book_id: book.book_id.value(),
            title: book.title,
            author: book.author,
        }
    }
}

/// 会員レスポンス
///
/// 永続化レコードの直接のシリアライズ（全フィールドを含む）。
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member_id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone: String,
    pub category: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            member_id: member.member_id.value(),
            name: member.name,
            email: member.email,
            password: member.password,
            address: member.address,
            phone: member.phone,
            category: member.category.as_str().to_string(),
        }
    }
}

/// 在庫レスポンス
#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub inventory_id: Uuid,
    pub book_id: Uuid,
    pub total_copies: i32,
    pub available_copies: i32,
    pub lost_copies: i32,
    pub damaged_copies: i32,
    pub last_updated: NaiveDate,
}

impl From<Inventory> for InventoryResponse {
    fn from(inventory: Inventory) -> Self {
        Self {
            inventory_id: inventory.inventory_id.value(),
            book_id: inventory.book_id.value(),
            total_copies: inventory.total_copies,
            available_copies: inventory.available_copies,
            lost_copies: inventory.lost_copies,
            damaged_copies: inventory.damaged_copies,
            last_updated: inventory.last_updated,
        }
    }
}

/// 貸出レスポンス（関連レコードをネストして含む）
#[derive(Debug, Serialize)]
pub struct BorrowResponse {
    pub borrow_id: Uuid,
    pub book: BookResponse,
    pub member: MemberResponse,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: String,
}

impl From<BorrowDetails> for BorrowResponse {
    fn from(details: BorrowDetails) -> Self {
        Self {
            borrow_id: details.borrow.borrow_id.value(),
            book: BookResponse::from(details.book),
            member: MemberResponse::from(details.member),
            issue_date: details.borrow.issue_date,
            due_date: details.borrow.due_date,
            return_date: details.borrow.return_date,
            status: details.borrow.status.as_str().to_string(),
        }
    }
}

/// 罰金レスポンス
#[derive(Debug, Serialize)]
pub struct FineResponse {
    pub fine_id: Uuid,
    pub borrow_id: Uuid,
    pub amount: i64,
    pub fine_date: NaiveDate,
    pub status: String,
}

impl From<Fine> for FineResponse {
    fn from(fine: Fine) -> Self {
        Self {
            fine_id: fine.fine_id.value(),
            borrow_id: fine.borrow_id.value(),
            amount: fine.amount,
            fine_date: fine.fine_date,
            status: fine.status.as_str().to_string(),
        }
    }
}

/// 通知レスポンス
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub notification_id: Uuid,
    pub member_id: Uuid,
    pub message: String,
    pub sent_date: NaiveDate,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            notification_id: notification.notification_id.value(),
            member_id: notification.member_id.value(),
            message: notification.message,
            sent_date: notification.sent_date,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
