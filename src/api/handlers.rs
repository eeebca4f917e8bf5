use crate::application::{
    BookService, BorrowService, FineService, InventoryService, MemberService, NotificationService,
};
use crate::domain::commands::ReturnBook;
use crate::domain::value_objects::{BookId, BorrowId, MemberId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{
        BookRequest, BookResponse, BorrowBookRequest, BorrowResponse, CreateInventoryRequest,
        FineResponse, InventoryResponse, ListNotificationsQuery, MemberRequest, MemberResponse,
        NotificationResponse,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
///
/// すべてのサービスは起動時に明示的に構築され、ここに保持される。
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService>,
    pub member_service: Arc<MemberService>,
    pub inventory_service: Arc<InventoryService>,
    pub borrow_service: Arc<BorrowService>,
    pub fine_service: Arc<FineService>,
    pub notification_service: Arc<NotificationService>,
}

// ============================================================================
// Book handlers
// ============================================================================

/// POST /api/books - 書籍を登録
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let book = state.book_service.add_book(req.title, req.author).await?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// GET /api/books - 書籍一覧を取得
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = state.book_service.get_all_books().await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// PUT /api/books/:id - 書籍を更新
///
/// 対象が存在しない場合は404を返す。
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
    Json(req): Json<BookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state
        .book_service
        .update_book(BookId::from_uuid(book_id), req.title, req.author)
        .await?;

    Ok(Json(BookResponse::from(book)))
}

/// DELETE /api/books/:id - 書籍を削除
///
/// 成功時は204、対象が存在しない場合は404を返す。
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .book_service
        .delete_book(BookId::from_uuid(book_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Member handlers
// ============================================================================

/// POST /api/members - 会員を登録
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let member = state
        .member_service
        .add_member(
            req.name,
            req.email,
            req.password,
            req.address,
            req.phone,
            req.category,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(MemberResponse::from(member))))
}

/// GET /api/members - 会員一覧を取得
pub async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = state.member_service.get_all_members().await?;

    Ok(Json(
        members.into_iter().map(MemberResponse::from).collect(),
    ))
}

/// GET /api/members/:id - 会員詳細をIDで取得
pub async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<Uuid>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state
        .member_service
        .get_member_by_id(MemberId::from_uuid(member_id))
        .await?;

    Ok(Json(MemberResponse::from(member)))
}

/// PUT /api/members/:id - 会員を更新
pub async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<Uuid>,
    Json(req): Json<MemberRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state
        .member_service
        .update_member(
            MemberId::from_uuid(member_id),
            req.name,
            req.email,
            req.password,
            req.address,
            req.phone,
            req.category,
        )
        .await?;

    Ok(Json(MemberResponse::from(member)))
}

/// DELETE /api/members/:id - 会員を削除
pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .member_service
        .delete_member(MemberId::from_uuid(member_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Inventory handlers
// ============================================================================

/// POST /api/inventory - 書籍の在庫行を作成
///
/// 強制されるビジネスルール:
/// - 書籍が存在すること
/// - 在庫行は書籍ごとに1行まで
pub async fn create_inventory(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateInventoryRequest>,
) -> Result<(StatusCode, Json<InventoryResponse>), ApiError> {
    let inventory = state
        .inventory_service
        .create_inventory(BookId::from_uuid(req.book_id), req.total_copies)
        .await?;

    Ok((StatusCode::CREATED, Json(InventoryResponse::from(inventory))))
}

/// GET /api/inventory - 在庫一覧を取得
pub async fn list_inventories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<InventoryResponse>>, ApiError> {
    let inventories = state.inventory_service.get_all_inventories().await?;

    Ok(Json(
        inventories
            .into_iter()
            .map(InventoryResponse::from)
            .collect(),
    ))
}

// ============================================================================
// Borrow handlers
// ============================================================================

/// POST /api/borrow - 書籍を貸し出す
///
/// 強制されるビジネスルール:
/// - 会員が存在すること
/// - 書籍が存在すること
/// - 在庫行が存在し、貸出可能な冊数が1以上あること
pub async fn borrow_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BorrowBookRequest>,
) -> Result<(StatusCode, Json<BorrowResponse>), ApiError> {
    let cmd = req.to_command();

    let details = state.borrow_service.borrow_book(cmd).await?;

    Ok((StatusCode::CREATED, Json(BorrowResponse::from(details))))
}

/// GET /api/borrow - 貸出一覧を関連レコード付きで取得
pub async fn list_borrows(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BorrowResponse>>, ApiError> {
    let borrows = state.borrow_service.get_all_borrows().await?;

    Ok(Json(
        borrows.into_iter().map(BorrowResponse::from).collect(),
    ))
}

/// PUT /api/borrow/return/:id - 書籍を返却
///
/// 返却ワークフロー全体を実行し、更新された貸出レコードを
/// 関連レコード付きで返す。
///
/// 強制されるビジネスルール:
/// - 貸出が存在すること
/// - 既に返却済みでないこと
/// - 在庫に1冊戻す
/// - 延滞があれば罰金を査定し、罰金の有無で分岐する通知を記録する
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Path(borrow_id): Path<Uuid>,
) -> Result<Json<BorrowResponse>, ApiError> {
    let cmd = ReturnBook {
        borrow_id: BorrowId::from_uuid(borrow_id),
        return_date: chrono::Utc::now().date_naive(),
    };

    let details = state.borrow_service.return_book(cmd).await?;

    Ok(Json(BorrowResponse::from(details)))
}

// ============================================================================
// Fine / Notification handlers
// ============================================================================

/// GET /api/fines - 罰金一覧を取得
pub async fn list_fines(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FineResponse>>, ApiError> {
    let fines = state.fine_service.get_all_fines().await?;

    Ok(Json(fines.into_iter().map(FineResponse::from).collect()))
}

/// GET /api/notifications - 会員の通知一覧を取得
///
/// クエリパラメータ:
/// - member_id: 会員IDでフィルタリング（必須）
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<Json<Vec<NotificationResponse>>, ApiError> {
    // member_idを必須とする
    let member_id = query
        .member_id
        .ok_or_else(|| ApiError::BadRequest("member_id query parameter is required".to_string()))?;

    let notifications = state
        .notification_service
        .get_notifications_for_member(MemberId::from_uuid(member_id))
        .await?;

    Ok(Json(
        notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    ))
}
